//! Terminal front ends for the two forms.
//!
//! Both commands drive the same pure reducers the browser UI uses: prompt
//! answers become field events, submission becomes a `Submit` event, and
//! the HTTP outcome feeds back as a `Completed` event whose message is
//! printed. The round trip is identical to the site's, minus the styling.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use openday_core::badge::{badge_name, draw_badge};
use openday_core::form::registration::{
    GENDERS, INTERESTS, OCCUPATIONS, RegistrationEvent, RegistrationField, RegistrationForm,
};
use openday_core::form::SubmitOutcome;
use openday_core::form::survey::{SurveyEvent, SurveyField, SurveyForm};

/// Submit the survey payload and print the resulting status copy.
pub async fn run_survey(endpoint: &str) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut form = SurveyForm::default();
    let prompts: [(SurveyField, &str); 9] = [
        (SurveyField::Email, "Email"),
        (
            SurveyField::Personality,
            "Personality (rage/patience/chaotic/chill)",
        ),
        (SurveyField::Superpower, "If you had a superpower"),
        (SurveyField::TeamSpirit, "Team player? (team/solo/depends)"),
        (SurveyField::Snack, "Go-to binge-watch snack"),
        (SurveyField::Meme, "Which meme are you"),
        (SurveyField::Mascot, "Mascot for your inner self"),
        (SurveyField::Song, "Song for your current vibe"),
        (SurveyField::DeadlineReaction, "Reaction to \"deadline\""),
    ];
    for (field, prompt) in prompts {
        form = form.apply(SurveyEvent::Set(field, ask(&mut lines, prompt)?));
    }

    let badge_path = draw_badge(&mut rand::thread_rng());
    form = form.apply(SurveyEvent::Submit {
        badge_path: badge_path.to_string(),
    });

    let url = format!("{}/api/about-you", endpoint.trim_end_matches('/'));
    let outcome = post_json(&url, &form.payload()).await;
    let form = form.apply(SurveyEvent::Completed(outcome));

    if let Some(message) = form.message {
        println!("{message}");
    }
    if let Some(path) = &form.badge_path {
        println!("You got a {} color badge! ({path})", badge_name(path));
    }
    Ok(())
}

/// Submit a registration and print the resulting status copy.
pub async fn run_registration(endpoint: &str) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut form = RegistrationForm::default();
    let prompts: [(RegistrationField, &str); 7] = [
        (RegistrationField::Name, "Name"),
        (RegistrationField::Email, "Email"),
        (RegistrationField::Age, "Age"),
        (RegistrationField::PhoneNumber, "Phone number"),
        (RegistrationField::State, "State"),
        (RegistrationField::City, "City"),
        (RegistrationField::Country, "Country"),
    ];
    for (field, prompt) in prompts {
        form = form.apply(RegistrationEvent::Set(field, ask(&mut lines, prompt)?));
    }

    let gender = ask(&mut lines, &format!("Gender ({})", GENDERS.join("/")))?;
    form = form.apply(RegistrationEvent::Set(RegistrationField::Gender, gender));
    if form.shows_other_gender() {
        let other = ask(&mut lines, "Please specify")?;
        form = form.apply(RegistrationEvent::Set(RegistrationField::OtherGender, other));
    }

    println!("Occupations:");
    for (i, occupation) in OCCUPATIONS.iter().enumerate() {
        println!("  {}. {occupation}", i + 1);
    }
    let picked = ask(&mut lines, "Occupation number")?;
    let occupation = picked
        .parse::<usize>()
        .ok()
        .and_then(|n| OCCUPATIONS.get(n.wrapping_sub(1)))
        .copied()
        .unwrap_or("Other");
    form = form.apply(RegistrationEvent::Set(
        RegistrationField::Occupation,
        occupation.to_string(),
    ));
    if form.shows_other_occupation() {
        let other = ask(&mut lines, "Specify your occupation")?;
        form = form.apply(RegistrationEvent::Set(
            RegistrationField::OtherOccupation,
            other,
        ));
    }

    form = form.apply(RegistrationEvent::ToggleDropdown);
    for interest in INTERESTS {
        let answer = ask(&mut lines, &format!("Interested in {interest}? [y/N]"))?;
        if answer.eq_ignore_ascii_case("y") {
            form = form.apply(RegistrationEvent::ToggleInterest(interest.to_string()));
        }
    }
    form = form.apply(RegistrationEvent::ClickOutside);

    form = form.apply(RegistrationEvent::Submit);
    if let Some(status) = form.status() {
        println!("{status}");
    }

    let url = format!("{}/api/register", endpoint.trim_end_matches('/'));
    let outcome = post_json(&url, &form.payload()).await;
    let form = form.apply(RegistrationEvent::Completed(outcome));

    if let Some(status) = form.status() {
        println!("{status}");
    }
    Ok(())
}

/// POST a JSON payload, folding the result into a form outcome.
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> SubmitOutcome {
    match reqwest::Client::new().post(url).json(payload).send().await {
        Ok(resp) if resp.status().is_success() => SubmitOutcome::Accepted,
        Ok(resp) => {
            tracing::warn!(status = resp.status().as_u16(), url = %url, "submission rejected");
            SubmitOutcome::Rejected
        }
        Err(e) => {
            tracing::warn!(error = %e, url = %url, "submission failed");
            SubmitOutcome::TransportFailed
        }
    }
}

fn ask(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing prompt")?;
    let line = lines
        .next()
        .unwrap_or_else(|| Ok(String::new()))
        .context("reading answer")?;
    Ok(line.trim().to_string())
}
