use crate::*;
use std::io::BufRead;
use std::time::Duration;

pub fn handle_quiz_commands(
    cli: &Cli,
    config: &ConfigFile,
    catalog: &Catalog,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Recommend {
            product,
            level,
            team,
            timeline,
            priority,
            tech,
        } => {
            let answers = QuizAnswers {
                product: product.clone(),
                level: level.clone(),
                team: team.clone(),
                timeline: timeline.clone(),
                priority: priority.clone(),
                tech: dedupe(tech),
            };
            let recs = recommend(&catalog.kits, Some(&answers));
            emit_rows(
                cli.json,
                &recs,
                "no kit scored above the match threshold",
                recommendation_text,
            )?;
        }
        Commands::Quiz => {
            let delay = Duration::from_millis(config.quiz.auto_advance_ms);
            let stdin = std::io::stdin();
            let answers = run_quiz(stdin.lock(), delay)?;
            let report = QuizReport {
                completed: answers.is_some(),
                recommendations: recommend(&catalog.kits, answers.as_ref()),
                answers,
            };
            emit(cli.json, report, |r| {
                if !r.completed {
                    return "quiz cancelled".to_string();
                }
                if r.recommendations.is_empty() {
                    return "no kit scored above the match threshold".to_string();
                }
                r.recommendations
                    .iter()
                    .map(recommendation_text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

/// Drive a [`QuizSequencer`] from input lines. Lines are an option (text or
/// 1-based number), `:next`, `:back` or `:quit`. End of input cancels.
pub fn run_quiz<R: BufRead>(input: R, delay: Duration) -> anyhow::Result<Option<QuizAnswers>> {
    let mut quiz = QuizSequencer::new();
    let mut lines = input.lines();

    while let Some(step) = quiz.current() {
        prompt(&quiz, step);
        let Some(line) = lines.next() else {
            quiz.cancel();
            break;
        };
        let line = line?;
        let input = line.trim();
        match input {
            "" => continue,
            ":quit" | ":q" => {
                quiz.cancel();
                break;
            }
            ":back" | ":b" => quiz.back()?,
            ":next" | ":n" => match quiz.next() {
                Ok(Some(done)) => return Ok(Some(done)),
                Ok(None) => {}
                Err(e @ QuizError::Unanswered(_)) => eprintln!("{}", e),
                Err(e) => return Err(e.into()),
            },
            value => {
                let value = option_by_number(step, value).unwrap_or(value);
                match quiz.select(value) {
                    Ok(Some(pending)) => {
                        std::thread::sleep(delay);
                        if let Some(done) = quiz.fire(pending) {
                            return Ok(Some(done));
                        }
                    }
                    Ok(None) => {}
                    Err(e @ QuizError::UnknownOption { .. }) => eprintln!("{}", e),
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
    log::debug!("quiz closed before completion");
    Ok(None)
}

fn option_by_number(step: &Step, raw: &str) -> Option<&'static str> {
    let n: usize = raw.parse().ok()?;
    n.checked_sub(1).and_then(|i| step.options.get(i)).copied()
}

fn prompt(quiz: &QuizSequencer, step: &Step) {
    let index = match quiz.phase() {
        Phase::Step(i) => i + 1,
        _ => return,
    };
    eprintln!(
        "Step {} of {} ({}%) {}",
        index,
        STEPS.len(),
        quiz.progress_percent(),
        step.title
    );
    for (i, option) in step.options.iter().enumerate() {
        let picked =
            step.kind == StepKind::Multi && quiz.answers().tech.iter().any(|t| t == option);
        let marker = if picked { "[x]" } else { "[ ]" };
        eprintln!("  {} {}. {}", marker, i + 1, option);
    }
    if step.kind == StepKind::Multi {
        eprintln!("  (toggle options, then :next to continue)");
    }
}

fn dedupe(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

fn recommendation_text(r: &Recommendation) -> String {
    let mut line = format!("{}% match\t{}\t{}", r.score, r.kit, r.name);
    let mut why = r.why.clone();
    if let Some(level) = &r.skill_level {
        why.push(level.clone());
    }
    if !why.is_empty() {
        line.push_str(&format!("\t{}", why.join("; ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> Option<QuizAnswers> {
        run_quiz(Cursor::new(script.to_string()), Duration::ZERO).unwrap()
    }

    #[test]
    fn scripted_quiz_completes() {
        let answers = run("Backend\n1\nPython\nAI\n:next\nFast Setup\n").expect("completed");
        assert_eq!(answers.product.as_deref(), Some("Backend"));
        assert_eq!(answers.level.as_deref(), Some("Beginner"));
        assert_eq!(answers.tech, vec!["Python".to_string(), "AI".to_string()]);
        assert_eq!(answers.priority.as_deref(), Some("Fast Setup"));
    }

    #[test]
    fn back_then_reanswer_overwrites() {
        let answers = run("Backend\n:back\nAI\nAdvanced\n:next\n2\n").expect("completed");
        assert_eq!(answers.product.as_deref(), Some("AI"));
        assert_eq!(answers.level.as_deref(), Some("Advanced"));
        assert!(answers.tech.is_empty());
        assert_eq!(answers.priority.as_deref(), Some("Best Practices"));
    }

    #[test]
    fn eof_or_quit_cancels() {
        assert!(run("Backend\nBeginner\n").is_none());
        assert!(run("Backend\n:quit\nBeginner\n").is_none());
    }

    #[test]
    fn bad_options_are_skipped() {
        let answers =
            run("Spaceship\n0\n99\nWeb App\nBeginner\n:next\nScalability\n").expect("completed");
        assert_eq!(answers.product.as_deref(), Some("Web App"));
    }

    #[test]
    fn next_on_unanswered_single_step_reprompts() {
        let answers =
            run(":next\nBackend\nBeginner\n:next\n:next\nScalability\n").expect("completed");
        assert_eq!(answers.product.as_deref(), Some("Backend"));
        assert_eq!(answers.priority.as_deref(), Some("Scalability"));

        assert!(run("Backend\nBeginner\n:next\n:next\n").is_none());
    }

    #[test]
    fn tech_flags_are_deduplicated() {
        let v = vec!["Python".to_string(), "AI".to_string(), "Python".to_string()];
        assert_eq!(dedupe(&v), vec!["Python".to_string(), "AI".to_string()]);
    }
}
