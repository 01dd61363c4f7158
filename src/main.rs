use std::io::{self, BufRead, Write};

use dotenv::dotenv;
use log::{debug, info};
use quiz_swap::config::Config;
use quiz_swap::quiz::draw::{RandomSource, SeededRandom, SystemRandom};
use quiz_swap::quiz::loader::load_question_set;
use quiz_swap::{ChoiceSwapEngine, QuestionSet, Quiz};

type AppResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn main() -> AppResult {
    // Loaded before the logger so RUST_LOG can come from .env too.
    let dotenv_loaded = dotenv().is_ok();
    pretty_env_logger::init();
    if !dotenv_loaded {
        debug!("No .env file found, using the process environment");
    }

    let mut config = Config::from_env()?;
    if let Some(path) = std::env::args().nth(1) {
        config.quiz_file = path.into();
    }
    info!("Starting quiz with {:?}", config);

    let set = load_question_set(&config.quiz_file)?;
    match config.seed {
        Some(seed) => play(&set, SeededRandom::new(seed)),
        None => play(&set, SystemRandom::new()),
    }
}

fn play<R: RandomSource>(set: &QuestionSet, source: R) -> AppResult {
    let mut engine = ChoiceSwapEngine::new(source);
    let mut quiz = Quiz::from_question_set(set, &mut engine);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", set.name())?;

    while let Some(question) = quiz.current() {
        writeln!(stdout, "Question #{}: {}", quiz.question_number(), question.text)?;
        for (i, choice) in question.multiple_choice.choices().iter().enumerate() {
            writeln!(stdout, "  {}. {}", i + 1, choice.answer)?;
        }
        let correct_answer = question.multiple_choice.correct_choice().answer.clone();

        let choice_index = loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let Some(line) = input.next() else {
                writeln!(stdout)?;
                return finish(&quiz);
            };
            match line?.trim().parse::<usize>() {
                Ok(number) if (1..=question.multiple_choice.choices().len()).contains(&number) => {
                    break number - 1
                }
                _ => writeln!(
                    stdout,
                    "Please enter a number between 1 and {}",
                    question.multiple_choice.choices().len()
                )?,
            }
        };

        if quiz.answer(choice_index)? {
            writeln!(stdout, "Correct!\n")?;
        } else {
            writeln!(stdout, "Wrong! The correct answer is {}\n", correct_answer)?;
        }
    }

    finish(&quiz)
}

fn finish(quiz: &Quiz) -> AppResult {
    println!(
        "Quiz finished! You answered {} of {} questions correctly",
        quiz.score(),
        quiz.len()
    );
    info!("Quiz finished with score {}/{}", quiz.score(), quiz.len());
    Ok(())
}
