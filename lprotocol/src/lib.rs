//! Line-prefixed response grammar between the controller and the model.
//!
//! Exactly two forms are recognized, and both must hold bit-for-bit for
//! compatibility with existing prompts:
//!
//! ```text
//! FUNCTION_CALL:name|arg1|arg2|...
//! FINAL_ANSWER:<json>
//! ```
//!
//! Classification is total: malformed text is never an error, it is
//! `Unrecognized` and left for the controller to act on.
//!
//! ```rust
//! use lprotocol::{ParsedResponse, parse};
//!
//! let parsed = parse("FUNCTION_CALL: get_recipes|sugar-free biscuits");
//! assert_eq!(
//!     parsed,
//!     ParsedResponse::FunctionCall {
//!         name: "get_recipes".to_string(),
//!         args: vec!["sugar-free biscuits".to_string()],
//!     }
//! );
//! ```

pub const FUNCTION_CALL_PREFIX: &str = "FUNCTION_CALL:";
pub const FINAL_ANSWER_PREFIX: &str = "FINAL_ANSWER:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedResponse {
    FunctionCall { name: String, args: Vec<String> },
    FinalAnswer { payload: String },
    Unrecognized { raw: String },
}

impl ParsedResponse {
    pub fn is_function_call(&self) -> bool {
        matches!(self, Self::FunctionCall { .. })
    }

    pub fn is_final_answer(&self) -> bool {
        matches!(self, Self::FinalAnswer { .. })
    }
}

/// Classifies a raw model reply. The prefix must sit at position zero of
/// the trimmed text; appearing mid-string does not count.
pub fn parse(raw: &str) -> ParsedResponse {
    let trimmed = raw.trim();

    if let Some(rest) = trimmed.strip_prefix(FUNCTION_CALL_PREFIX) {
        let mut tokens = rest.split('|').map(str::trim);
        // split always yields a first token, empty input included
        let name = tokens.next().unwrap_or_default().to_string();
        let args = tokens.map(ToString::to_string).collect();

        return ParsedResponse::FunctionCall { name, args };
    }

    if let Some(rest) = trimmed.strip_prefix(FINAL_ANSWER_PREFIX) {
        return ParsedResponse::FinalAnswer {
            payload: rest.trim().to_string(),
        };
    }

    ParsedResponse::Unrecognized {
        raw: raw.to_string(),
    }
}

pub fn render_function_call<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let mut rendered = format!("{FUNCTION_CALL_PREFIX}{name}");
    for arg in args {
        rendered.push('|');
        rendered.push_str(arg.as_ref());
    }
    rendered
}

pub fn render_final_answer(payload: &str) -> String {
    format!("{FINAL_ANSWER_PREFIX}{payload}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_call_extracts_name_and_ordered_args() {
        let parsed = parse("FUNCTION_CALL:get_recipes|a| b |c ");
        assert_eq!(
            parsed,
            ParsedResponse::FunctionCall {
                name: "get_recipes".to_string(),
                args: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }
        );
    }

    #[test]
    fn function_call_tolerates_surrounding_whitespace() {
        let parsed = parse("  FUNCTION_CALL: get_recipes | sugar-free biscuits \n");
        assert_eq!(
            parsed,
            ParsedResponse::FunctionCall {
                name: "get_recipes".to_string(),
                args: vec!["sugar-free biscuits".to_string()],
            }
        );
    }

    #[test]
    fn function_call_with_no_pipes_has_zero_args() {
        let parsed = parse("FUNCTION_CALL:get_recipes");
        assert_eq!(
            parsed,
            ParsedResponse::FunctionCall {
                name: "get_recipes".to_string(),
                args: Vec::new(),
            }
        );
    }

    #[test]
    fn final_answer_keeps_payload_for_deferred_decoding() {
        let parsed = parse("FINAL_ANSWER: {\"recipes\": []}");
        assert_eq!(
            parsed,
            ParsedResponse::FinalAnswer {
                payload: "{\"recipes\": []}".to_string(),
            }
        );
        assert!(parsed.is_final_answer());
    }

    #[test]
    fn text_without_a_leading_prefix_is_unrecognized() {
        for raw in [
            "I am not sure",
            "the model says FUNCTION_CALL:get_recipes later",
            "final answer: {\"recipes\": []}",
            "",
        ] {
            assert_eq!(
                parse(raw),
                ParsedResponse::Unrecognized {
                    raw: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn render_function_call_round_trips_through_parse() {
        let rendered = render_function_call("get_recipes", &["sugar-free biscuits", "3"]);
        assert_eq!(rendered, "FUNCTION_CALL:get_recipes|sugar-free biscuits|3");

        let parsed = parse(&rendered);
        assert_eq!(
            parsed,
            ParsedResponse::FunctionCall {
                name: "get_recipes".to_string(),
                args: vec!["sugar-free biscuits".to_string(), "3".to_string()],
            }
        );
    }

    #[test]
    fn render_final_answer_uses_the_exact_prefix() {
        assert_eq!(
            render_final_answer("{\"recipes\":[]}"),
            "FINAL_ANSWER:{\"recipes\":[]}"
        );
    }
}
