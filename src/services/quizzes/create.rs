use tracing::info;

use crate::errors::{ClassroomError, Result};
use crate::models::quizzes::entities::{Quiz, parse_options};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::services::CommandOutcome;
use crate::services::guard::ensure_teacher;
use crate::store::ClassroomState;
use crate::utils::validate::required;
use crate::utils::{new_id, now_millis};

pub fn create_quiz(state: &mut ClassroomState, req: CreateQuizRequest) -> Result<CommandOutcome> {
    let teacher = ensure_teacher(state, "add quiz questions")?;

    let question = required(&req.question, "Fill all fields")?;
    let options_raw = required(&req.options, "Fill all fields")?;
    let answer_text = required(&req.answer, "Fill all fields")?;

    let options = parse_options(&options_raw);
    if options.is_empty() {
        return Err(ClassroomError::validation("Provide at least one option"));
    }

    let quiz = Quiz {
        id: new_id(),
        question,
        options,
        answer_text,
        created_by: teacher.name,
        created_at: now_millis(),
    };

    info!("Quiz {} added with {} option(s)", quiz.id, quiz.options.len());
    let id = quiz.id.clone();
    state.add_quiz(quiz);
    Ok(CommandOutcome::created("Quiz question added", id))
}
