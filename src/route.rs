//! Path parsing for the three public routes.

use percent_encoding::percent_decode_str;

use crate::provider::Model;

pub const HOME_SEGMENT: &str = "home";

/// Terminal outcome of parsing a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Ask { model: Model, question: String },
    MissingQuestion,
    InvalidRoute,
}

impl Route {
    /// Parse a raw (still percent-encoded) request path.
    ///
    /// The question check runs before the selector check, so an unknown
    /// selector with nothing after it is a missing question, not an invalid route.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let Some((selector, rest)) = segments.split_first() else {
            return Self::Home;
        };
        if *selector == HOME_SEGMENT {
            return Self::Home;
        }

        let question = decode_question(rest);
        if question.is_empty() {
            return Self::MissingQuestion;
        }

        match Model::from_selector(selector) {
            Some(model) => Self::Ask { model, question },
            None => Self::InvalidRoute,
        }
    }
}

/// Join segments with single spaces, then percent-decode and trim.
fn decode_question(segments: &[&str]) -> String {
    let joined = segments.join(" ");
    percent_decode_str(&joined)
        .decode_utf8_lossy()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(model: Model, question: &str) -> Route {
        Route::Ask {
            model,
            question: question.to_string(),
        }
    }

    #[test]
    fn empty_and_home_paths_are_help() {
        for path in ["", "/", "//", "/home", "/home/anything/else", "home"] {
            assert_eq!(Route::parse(path), Route::Home, "path {path:?}");
        }
    }

    #[test]
    fn segments_are_rejoined_with_single_spaces() {
        assert_eq!(Route::parse("/gpt/what/is/love"), ask(Model::Gpt, "what is love"));
        assert_eq!(Route::parse("/gpt//what///is"), ask(Model::Gpt, "what is"));
    }

    #[test]
    fn question_is_percent_decoded_and_trimmed() {
        assert_eq!(
            Route::parse("/gemini/%20%20hello%20world%20"),
            ask(Model::Gemini, "hello world")
        );
        assert_eq!(
            Route::parse("/gpt/what%20is%202%2B2"),
            ask(Model::Gpt, "what is 2+2")
        );
        assert_eq!(
            Route::parse("/gpt/xin%20ch%C3%A0o"),
            ask(Model::Gpt, "xin chào")
        );
    }

    #[test]
    fn plus_is_not_a_space() {
        assert_eq!(Route::parse("/gpt/what is 2+2"), ask(Model::Gpt, "what is 2+2"));
    }

    #[test]
    fn malformed_escapes_are_kept_literally() {
        assert_eq!(Route::parse("/gpt/100%"), ask(Model::Gpt, "100%"));
        assert_eq!(Route::parse("/gpt/%zz"), ask(Model::Gpt, "%zz"));
    }

    #[test]
    fn invalid_utf8_is_replaced_lossily() {
        assert_eq!(Route::parse("/gpt/%FF"), ask(Model::Gpt, "\u{FFFD}"));
        assert_eq!(
            Route::parse("/gemini/caf%C3%A9/%FE"),
            ask(Model::Gemini, "café \u{FFFD}")
        );
    }

    #[test]
    fn blank_question_is_missing() {
        for path in ["/gpt", "/gpt/", "/gemini/%20", "/gpt/%20%09/%20"] {
            assert_eq!(Route::parse(path), Route::MissingQuestion, "path {path:?}");
        }
    }

    #[test]
    fn unknown_selector_with_question_is_invalid() {
        assert_eq!(Route::parse("/claude/hello"), Route::InvalidRoute);
        assert_eq!(Route::parse("/GPT/hello"), Route::InvalidRoute);
    }

    #[test]
    fn unknown_selector_without_question_is_missing_question() {
        assert_eq!(Route::parse("/claude"), Route::MissingQuestion);
    }

    #[test]
    fn query_string_is_ignored() {
        assert_eq!(Route::parse("/gpt/hello?x=1"), ask(Model::Gpt, "hello"));
        assert_eq!(Route::parse("/?debug"), Route::Home);
    }
}
