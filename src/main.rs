//! Pathway Finder terminal driver
//!
//! Renders quiz views as text and reads one command per line from stdin.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use pathway_finder::adapters::FileContentSource;
use pathway_finder::application::{
    render_view, QuizLoader, QuizView, LOAD_FAILURE_MESSAGE,
};
use pathway_finder::config::AppConfig;
use pathway_finder::domain::foundation::{OptionId, Percentage};
use pathway_finder::domain::navigation::{NavigationEngine, Selection};
use pathway_finder::domain::session::Participant;
use pathway_finder::telemetry;

type Input = Lines<BufReader<Stdin>>;

const YEARS: [(&str, &str); 5] = [
    ("9", "Year 9"),
    ("10", "Year 10"),
    ("11", "Year 11"),
    ("12", "Year 12"),
    ("parent", "Parent or guardian"),
];

const PARENT_NOTE: &str = "Thanks for exploring with your student! \
Answer each question the way they would, then share the result together.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    telemetry::init_tracing(&config.logging)?;

    let source = FileContentSource::from_config(&config.content);
    let loader = QuizLoader::new(std::sync::Arc::new(source))
        .with_feedback_defaults(config.feedback.to_defaults());

    let quiz = match loader.load().await {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!(error = %e, code = %e.code(), "unable to start quiz");
            eprintln!("{}", LOAD_FAILURE_MESSAGE);
            std::process::exit(1);
        }
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut engine = quiz.new_session();

    println!("Welcome to Pathway Finder!");
    let Some(participant) = ask_participant(&mut input).await? else {
        return Ok(());
    };
    if participant.is_parent() {
        println!("\n{}", PARENT_NOTE);
        if prompt(&mut input, "Press Enter to continue. ").await?.is_none() {
            return Ok(());
        }
    }
    // Start failures are rendered as an error view below.
    if let Err(e) = engine.begin_session(participant) {
        tracing::debug!(error = %e, "session failed to start");
    }

    loop {
        let view = render_view(&engine);
        print_view(&view);

        let Some(line) = prompt(&mut input, hint(&view)).await? else {
            break;
        };
        let command = line.trim();

        match (&view, command) {
            (_, "q") => break,
            (_, "r") => {
                if let Err(e) = engine.restart() {
                    tracing::debug!(error = %e, "restart failed");
                }
            }
            (_, "b") => {
                if !engine.go_back() {
                    println!("Nothing to go back to.");
                }
            }
            (QuizView::Feedback(_), "") => {
                if let Err(e) = engine.advance() {
                    tracing::debug!(error = %e, "advance after feedback failed");
                }
            }
            (QuizView::Question(question), choice) => {
                let picked = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| question.options.get(i));
                match picked {
                    Some(option) => choose(&mut engine, &option.id),
                    None => println!("Please pick a number from the list."),
                }
            }
            _ => println!("Sorry, I didn't catch that."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Selects an option and moves on, pausing for feedback when it applies.
fn choose(engine: &mut NavigationEngine, option: &OptionId) {
    match engine.select_option(option) {
        Ok(Selection::FeedbackCandidate(_)) => {
            if engine.enter_feedback().is_none() {
                if let Err(e) = engine.advance() {
                    tracing::debug!(error = %e, "advance failed");
                }
            }
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, option = %option, "selection failed"),
    }
}

async fn ask_participant(input: &mut Input) -> std::io::Result<Option<Participant>> {
    loop {
        let Some(name) = prompt(input, "\nWhat's your name? ").await? else {
            return Ok(None);
        };

        println!("Which year are you in?");
        for (i, (_, label)) in YEARS.iter().enumerate() {
            println!("  {}. {}", i + 1, label);
        }
        let Some(choice) = prompt(input, "> ").await? else {
            return Ok(None);
        };
        let year = choice
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| YEARS.get(i))
            .map(|(year, _)| *year)
            .unwrap_or("");

        match Participant::new(&name, year) {
            Ok(participant) => return Ok(Some(participant)),
            Err(e) => println!("{}", e),
        }
    }
}

async fn prompt(input: &mut Input, text: &str) -> std::io::Result<Option<String>> {
    print!("{}", text);
    std::io::stdout().flush()?;
    input.next_line().await
}

fn hint(view: &QuizView) -> &'static str {
    match view {
        QuizView::Welcome => "> ",
        QuizView::Question(q) if q.can_go_back => "\nNumber, [b]ack, [r]estart or [q]uit > ",
        QuizView::Question(_) => "\nNumber, [r]estart or [q]uit > ",
        QuizView::Feedback(_) => "\nPress Enter to continue > ",
        QuizView::Result(_) => "\n[b]ack, [r]estart or [q]uit > ",
        QuizView::Error(_) => "\n[r]estart or [q]uit > ",
    }
}

fn print_view(view: &QuizView) {
    match view {
        QuizView::Welcome => println!("\nLet's get started."),
        QuizView::Question(q) => {
            println!("\n{}", progress_bar(q.progress));
            println!("{}", q.prompt);
            if let Some(subtitle) = &q.subtitle {
                println!("  {}", subtitle);
            }
            for (i, option) in q.options.iter().enumerate() {
                let marker = if option.selected { "*" } else { " " };
                let glyph = option.glyph.as_deref().map(|g| format!("{} ", g)).unwrap_or_default();
                println!("{} {}. {}{}", marker, i + 1, glyph, option.text);
                if let Some(description) = &option.description {
                    println!("       {}", description);
                }
            }
        }
        QuizView::Feedback(f) => {
            println!("\n{}", progress_bar(f.progress));
            println!("{} {}", f.message.icon, f.message.title);
            println!("{}", f.message.message);
        }
        QuizView::Result(r) => {
            println!("\n{}", progress_bar(r.progress));
            println!("{}", r.title);
            println!("{}", r.blurb);
            if let Some(description) = &r.description {
                println!("\n{}", description);
            }
            println!("\nRecommended course: {}", r.course.title);
            println!("Campus: {}", r.course.campus);
            println!("More info: {}", r.course.url);
            if let Some(notes) = &r.course.notes {
                println!("Note: {}", notes);
            }
        }
        QuizView::Error(e) => {
            println!("\n{}", e.title);
            println!("{}", e.message);
        }
    }
}

fn progress_bar(progress: Percentage) -> String {
    let filled = usize::from(progress.value()) / 5;
    format!("[{}{}] {}", "#".repeat(filled), "-".repeat(20 - filled), progress)
}
