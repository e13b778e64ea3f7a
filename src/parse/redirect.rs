use thiserror::Error;

use super::{Command, REDIRECT_OPERATOR};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedirectError {
    #[error("missing redirection target")]
    MissingTarget,
    #[error("redirection must be followed by exactly one target, got {0}")]
    TooManyTargets(usize),
    #[error("only one redirection is allowed per command")]
    MultipleOperators,
    #[error("redirection without a command")]
    MissingCommand,
}

/// Pulls a trailing `> target` off `tokens`.
///
/// `tokens` must be non-empty, as produced by the tokenizer.
pub fn parse(mut tokens: Vec<String>) -> Result<Command, RedirectError> {
    let operators: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| is_operator(token))
        .map(|(pos, _)| pos)
        .collect();

    let pos = match operators.as_slice() {
        [] => {
            return Ok(Command {
                argv: tokens,
                redirect: None,
            })
        }
        [pos] => *pos,
        _ => return Err(RedirectError::MultipleOperators),
    };

    match tokens.len() - pos - 1 {
        0 => return Err(RedirectError::MissingTarget),
        1 => {}
        n => return Err(RedirectError::TooManyTargets(n)),
    }
    if pos == 0 {
        return Err(RedirectError::MissingCommand);
    }

    let target = tokens.pop();
    tokens.truncate(pos);

    Ok(Command {
        argv: tokens,
        redirect: target,
    })
}

fn is_operator(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(REDIRECT_OPERATOR) && chars.next().is_none()
}
