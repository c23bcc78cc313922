// Interactive menu: a numbered text menu driven by `dialoguer` prompts.
// Every action receives the `VacancyTracker` context explicitly.

use anyhow::{bail, Result};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::warn;
use vacancy_tracker_core::models::vacancy::Vacancy;
use vacancy_tracker_core::services::query_service::parse_amount;
use vacancy_tracker_core::VacancyTracker;

/// The only answer that confirms saving. Matching is case-sensitive.
const CONFIRM_ANSWER: &str = "yes";

const MENU: &str = "\
1. Show all vacancies from the file
2. Show top vacancies by salary
3. Show vacancies for a desired salary
4. Show vacancies with keywords in the description
5. Delete a vacancy
6. Exit";

/// Run the shell until the user picks "Exit".
///
/// When `initial_query` is `None` the user is asked for a search query first.
/// A failed fetch is reported and the shell continues with what is stored.
pub async fn run(tracker: &mut VacancyTracker, initial_query: Option<String>) -> Result<()> {
    println!("Welcome!");
    let query = match initial_query {
        Some(q) => q,
        None => prompt("Enter a search query")?,
    };

    match tracker.fetch(&query).await {
        Ok(batch) => println!("Fetched {} vacancies from {}", batch.len(), tracker.provider_name()),
        Err(e) => {
            warn!(error = %e, "fetch failed");
            println!("Could not fetch vacancies: {e}");
        }
    }

    loop {
        println!("\n{MENU}\n");
        let choice = prompt("Choose an option")?;
        match choice.trim() {
            "1" => print_vacancies(&tracker.all()),
            "2" => menu_top_n(tracker)?,
            "3" => menu_by_salary(tracker)?,
            "4" => menu_by_keywords(tracker)?,
            "5" => menu_delete(tracker)?,
            "6" => {
                println!("\nBye!");
                break;
            }
            _ => println!("Invalid option. Please try again.\n"),
        }
    }
    Ok(())
}

fn menu_top_n(tracker: &VacancyTracker) -> Result<()> {
    let input = prompt("\nHow many vacancies to show")?;
    let n = match parse_amount::<usize>(&input) {
        Ok(n) => n,
        Err(e) => {
            warn!(error = %e, "rejected vacancy count");
            println!("\nPlease enter a number");
            return Ok(());
        }
    };

    let top = tracker.top_by_salary(n);
    print_vacancies(&top);
    if !top.is_empty() {
        offer_save(tracker, &top)?;
    }
    Ok(())
}

fn menu_by_salary(tracker: &VacancyTracker) -> Result<()> {
    let input = prompt("Enter the desired salary")?;
    let desired = match parse_amount::<i64>(&input) {
        Ok(desired) => desired,
        Err(e) => {
            warn!(error = %e, "rejected desired salary");
            println!("Please enter a valid numeric salary");
            return Ok(());
        }
    };

    let found = tracker.by_salary(desired);
    if found.is_empty() {
        println!("No vacancies found for this salary");
        return Ok(());
    }
    print_vacancies(&found);
    offer_save(tracker, &found)
}

fn menu_by_keywords(tracker: &VacancyTracker) -> Result<()> {
    let input = prompt("\nEnter keywords separated by spaces")?;
    let keywords = split_keywords(&input);

    let found = tracker.by_keywords(&keywords);
    if found.is_empty() {
        println!("\nNo vacancies found for these keywords");
        return Ok(());
    }
    print_vacancies(&found);
    offer_save(tracker, &found)
}

fn menu_delete(tracker: &VacancyTracker) -> Result<()> {
    print_vacancies(&tracker.all());
    let id = prompt("Enter the id of the vacancy to delete")?;
    let id = id.trim();

    if tracker.delete(id)? {
        println!("\nVacancy {id} deleted");
    } else {
        println!("\nVacancy {id} not found");
    }
    Ok(())
}

/// Ask whether to keep only `vacancies` in the file.
fn offer_save(tracker: &VacancyTracker, vacancies: &[Vacancy]) -> Result<()> {
    let answer = prompt("Save only these vacancies to the file? (yes/no)")?;
    if is_confirmed(&answer) {
        tracker.save_only(vacancies)?;
        println!("Saved {} vacancies", vacancies.len());
    }
    Ok(())
}

fn print_vacancies(vacancies: &[Vacancy]) {
    for vacancy in vacancies {
        println!("{vacancy}\n");
    }
    println!("\nFound {} vacancies\n", vacancies.len());
}

/// Ask for one line of input. `dialoguer` needs a terminal, so piped or
/// scripted sessions read plain lines from stdin instead.
fn prompt(text: &str) -> Result<String> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        let answer: String = Input::new()
            .with_prompt(text)
            .allow_empty(true)
            .interact_text()?;
        return Ok(answer);
    }

    print!("{text}: ");
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

// ── Input helpers ───────────────────────────────────────────────────

/// Read one line without its line ending. End of input is an error, so a
/// script that never picks "Exit" terminates instead of looping.
pub fn read_answer<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        bail!("input closed before choosing Exit");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Only the exact answer `yes` counts; `Yes`, `y` and anything else mean no.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim() == CONFIRM_ANSWER
}

pub fn split_keywords(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}
