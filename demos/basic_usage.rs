// ============================================================================
// Basic Usage Example
// ============================================================================

use quiz_engine::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Quiz Engine Example ===\n");

    // A hard multiple-choice quiz across every domain and operator
    let config = QuizConfig::hard_mixed_choice(10);
    let mut engine = QuizEngine::default();
    let mut questions = engine.generate_batch(&config);

    println!("Generated {} questions:\n", questions.len());
    for (i, question) in questions.iter().enumerate() {
        print!("{:2}. [{}] {}", i + 1, question.domain(), question.prompt);
        if let Some(variable) = question.prompt.variable() {
            print!("   (solve for {})", variable);
        }
        if let Some(choices) = &question.choices {
            print!("   choices: {}", choices.entries().join(" | "));
        }
        println!();
    }

    // Simulate a session: answer the first half correctly, flub the rest
    println!("\nGrading a simulated session...");
    let half = questions.len() / 2;
    for (i, question) in questions.iter_mut().enumerate() {
        let submission = if i < half {
            question.display_answer()
        } else {
            "0".to_string()
        };
        match question.grade(&submission, 2.5) {
            Ok(correct) => println!(
                "  {} -> {} ({})",
                question.prompt,
                submission,
                if correct { "correct" } else { "wrong" }
            ),
            Err(e) => println!("  grading failed: {}", e),
        }
    }

    let summary = ScoreSummary::from_questions(&questions);
    println!("\n=== Session Summary ===");
    println!("Graded:         {}/{}", summary.graded, summary.total);
    println!("Correct:        {}", summary.correct);
    println!("Accuracy:       {:.0}%", summary.accuracy * 100.0);
    println!("Longest streak: {}", summary.longest_streak);
    println!("Time spent:     {:.1}s", summary.time_spent_secs);
}
