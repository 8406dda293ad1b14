//! Shared test doubles for engine integration tests.

use async_trait::async_trait;
use scheherazade_core::{GenerationRequest, Universe};
use scheherazade_error::{BackendError, ScheherazadeResult};
use scheherazade_interface::ScheherazadeDriver;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted backend double.
///
/// Recognizes the engine's prompt shapes and answers each with a
/// deterministic response, records every prompt it sees, and can be told to
/// fail in various ways.
#[derive(Debug, Default)]
pub struct ScriptedDriver {
    prompts: Mutex<Vec<String>>,
    /// Fail this many leading calls with a transient error
    fail_first: Mutex<usize>,
    /// Always fail chapter prompts for this chapter number (transient)
    fail_chapter: Option<u32>,
    /// Always fail compression prompts (transient)
    fail_compression: bool,
    /// Fail every call permanently
    permanent_failure: bool,
    /// Omit the recap block from chapter responses
    omit_recap: bool,
    /// Sleep this long per call, to widen race windows in concurrency tests
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl ScriptedDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `n` calls with a transient error, then behave.
    pub fn failing_first(n: usize) -> Self {
        Self {
            fail_first: Mutex::new(n),
            ..Self::default()
        }
    }

    /// Fail every call with a permanent error.
    pub fn always_permanent() -> Self {
        Self {
            permanent_failure: true,
            ..Self::default()
        }
    }

    /// Fail every chapter prompt for the given chapter number.
    pub fn failing_chapter(number: u32) -> Self {
        Self {
            fail_chapter: Some(number),
            ..Self::default()
        }
    }

    /// Fail every compression prompt.
    pub fn failing_compression() -> Self {
        Self {
            fail_compression: true,
            ..Self::default()
        }
    }

    /// Never append the recap block to chapter responses.
    pub fn without_recap_blocks() -> Self {
        Self {
            omit_recap: true,
            ..Self::default()
        }
    }

    /// Sleep for `delay` on every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every prompt seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn chapter_response(number: u32, include_recap: bool) -> String {
        let mut text = format!(
            "Chapter {number}: The Turning\n\n\
             Harry Potter discovered something new in chapter {number}. Hermione \
             Granger realized what it meant. The stakes rose again as the night \
             closed in. Suddenly a shadow moved at the edge of the lamplight.\n"
        );
        if include_recap {
            text.push_str(&format!(
                "\n=== RECAP ===\n\
                 Harry Potter discovered something new in chapter {number} and the \
                 stakes rose.\n\
                 opens: thread-{number} -- A mystery surfaced in chapter {number}\n"
            ));
            if number >= 3 {
                text.push_str(&format!("closes: thread-{}\n", number - 2));
            }
        }
        text
    }
}

#[async_trait]
impl ScheherazadeDriver for ScriptedDriver {
    async fn generate(&self, req: &GenerationRequest) -> ScheherazadeResult<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.prompts.lock().unwrap().push(req.prompt.clone());

        if self.permanent_failure {
            return Err(BackendError::permanent("scripted permanent failure").into());
        }
        {
            let mut remaining = self.fail_first.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                return Err(BackendError::transient("scripted transient failure").into());
            }
        }

        let prompt = &req.prompt;
        if prompt.starts_with("You are planning arc") {
            let arc = prompt
                .split_whitespace()
                .nth(4)
                .unwrap_or("0")
                .to_string();
            return Ok(format!(
                "Brief for arc {arc}: the conflict deepens and Harry Potter is \
                 tested; the arc ends with the board reset for what follows."
            ));
        }
        if prompt.starts_with("Write chapter ") {
            let number: u32 = prompt
                .strip_prefix("Write chapter ")
                .and_then(|rest| rest.split_whitespace().next())
                .and_then(|n| n.parse().ok())
                .expect("chapter prompt carries a number");
            if self.fail_chapter == Some(number) {
                return Err(BackendError::transient("scripted chapter failure").into());
            }
            return Ok(Self::chapter_response(number, !self.omit_recap));
        }
        if prompt.starts_with("Merge the chapter recap") {
            if self.fail_compression {
                return Err(BackendError::transient("scripted compression failure").into());
            }
            return Ok("The story so far, compressed.".to_string());
        }
        if prompt.starts_with("Summarize chapter") {
            let number: u32 = prompt
                .strip_prefix("Summarize chapter ")
                .and_then(|rest| rest.split_whitespace().next())
                .and_then(|n| n.parse().ok())
                .expect("recap prompt carries a number");
            return Ok(format!(
                "=== RECAP ===\nHarry Potter pressed on in chapter {number}.\n\
                 opens: thread-{number} -- A mystery surfaced in chapter {number}\n"
            ));
        }
        panic!("unrecognized prompt shape: {}", &prompt[..prompt.len().min(60)]);
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-test-model"
    }
}

/// A universe with a usable cast.
#[allow(dead_code)]
pub fn test_universe() -> Universe {
    Universe::builder()
        .name("Harry Potter")
        .genre("Fantasy")
        .main_characters(vec![
            "Harry Potter".into(),
            "Hermione Granger".into(),
        ])
        .themes(vec!["Magic".into(), "Friendship".into()])
        .build()
        .unwrap()
}
