use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

use serde::Serialize;

use crate::chain::ChainPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub severity: Severity,
    pub path: String,
    pub text: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.severity.as_str())?;
        if !self.path.is_empty() {
            write!(f, "{}: ", self.path)?;
        }
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone)]
struct Frame {
    name: Cow<'static, str>,
    pointer: bool,
    index: Option<usize>,
}

/// Location-tracked message sink shared by every codec step of one call.
///
/// Codecs never unwind: a failing value records an error here and the caller
/// substitutes a default, so sibling fields keep producing diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    failed: bool,
    messages: Vec<Message>,
    frames: Vec<Frame>,
    chain_policy: ChainPolicy,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain_policy(chain_policy: ChainPolicy) -> Self {
        Self {
            chain_policy,
            ..Self::default()
        }
    }

    pub fn chain_policy(&self) -> ChainPolicy {
        self.chain_policy
    }

    pub fn set_chain_policy(&mut self, chain_policy: ChainPolicy) {
        self.chain_policy = chain_policy;
    }

    /// Enters a named field.
    pub fn scope(&mut self, name: impl Into<Cow<'static, str>>) -> Scope<'_> {
        self.push(name.into(), false, None)
    }

    /// Enters a field reached through a pointer; the next frame renders after `->`.
    pub fn pointer(&mut self, name: impl Into<Cow<'static, str>>) -> Scope<'_> {
        self.push(name.into(), true, None)
    }

    /// Enters element `index` of an array field; the next frame renders after `.`.
    pub fn element(&mut self, name: impl Into<Cow<'static, str>>, index: usize) -> Scope<'_> {
        self.push(name.into(), false, Some(index))
    }

    fn push(&mut self, name: Cow<'static, str>, pointer: bool, index: Option<usize>) -> Scope<'_> {
        self.frames.push(Frame {
            name,
            pointer,
            index,
        });
        Scope { diag: self }
    }

    pub fn location(&self) -> String {
        let mut out = String::new();
        let mut prev_pointer = None;
        for frame in &self.frames {
            // Unnamed element frames index into the enclosing field.
            if frame.name.is_empty() {
                if let Some(index) = frame.index {
                    out.push_str(&format!("[{index}]"));
                }
                prev_pointer = Some(frame.pointer);
                continue;
            }
            match prev_pointer {
                Some(true) => out.push_str("->"),
                Some(false) => out.push('.'),
                None => {}
            }
            out.push_str(&frame.name);
            if let Some(index) = frame.index {
                out.push_str(&format!("[{index}]"));
            }
            prev_pointer = Some(frame.pointer);
        }
        out
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.failed = true;
        self.record(Severity::Error, text.into());
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.record(Severity::Warning, text.into());
    }

    fn record(&mut self, severity: Severity, text: String) {
        let path = self.location();
        self.messages.push(Message {
            severity,
            path,
            text,
        });
    }

    pub fn is_ok(&self) -> bool {
        !self.failed
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn error_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.severity == Severity::Error)
            .count()
    }

    pub fn render(&self) -> String {
        self.messages
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the rendered messages and clears them, or `None` if nothing was recorded.
    pub fn take_messages(&mut self) -> Option<String> {
        if self.messages.is_empty() {
            return None;
        }
        let rendered = self.render();
        self.messages.clear();
        Some(rendered)
    }

    /// Clears status, messages and location; keeps the chain policy.
    pub fn reset(&mut self) {
        self.failed = false;
        self.messages.clear();
        self.frames.clear();
    }
}

/// Location frame guard. The frame is popped when the guard drops.
pub struct Scope<'a> {
    diag: &'a mut Diagnostics,
}

impl Deref for Scope<'_> {
    type Target = Diagnostics;

    fn deref(&self) -> &Diagnostics {
        self.diag
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Diagnostics {
        self.diag
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.diag.frames.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_joins_fields_pointers_and_elements() {
        let mut diag = Diagnostics::new();
        {
            let mut state = diag.scope("GraphicsPipelineState");
            let mut layout = state.scope("PipelineLayout");
            let mut binding = layout.element("pBindings", 2);
            binding.error("bad binding");
        }
        {
            let mut root = diag.pointer("pNext<VkSamplerReductionModeCreateInfo>");
            let mut mode = root.scope("reductionMode");
            mode.warn("odd value");
        }
        assert_eq!(diag.depth(), 0);
        assert!(!diag.is_ok());
        assert_eq!(
            diag.messages()[0].to_string(),
            "[ERROR] GraphicsPipelineState.PipelineLayout.pBindings[2]: bad binding"
        );
        assert_eq!(
            diag.messages()[1].to_string(),
            "[WARNING] pNext<VkSamplerReductionModeCreateInfo>->reductionMode: odd value"
        );
    }

    #[test]
    fn unnamed_elements_index_the_enclosing_field() {
        let mut diag = Diagnostics::new();
        {
            let mut field = diag.scope("blendConstants");
            let mut item = field.element("", 3);
            item.error("not a number");
        }
        assert_eq!(diag.messages()[0].path, "blendConstants[3]");
    }

    #[test]
    fn fields_after_an_element_use_a_dot() {
        let mut diag = Diagnostics::new();
        {
            let mut layout = diag.scope("PipelineLayout");
            let mut binding = layout.element("pBindings", 2);
            let mut kind = binding.scope("descriptorType");
            kind.error("bad type");
        }
        assert_eq!(
            diag.messages()[0].path,
            "PipelineLayout.pBindings[2].descriptorType"
        );
    }

    #[test]
    fn chain_policy_can_be_replaced() {
        const STRICT: ChainPolicy = ChainPolicy {
            encode: crate::chain::OnUnknownLink::Error,
            decode: crate::chain::OnUnknownLink::Error,
        };
        let mut diag = Diagnostics::new();
        assert_eq!(diag.chain_policy(), ChainPolicy::default());
        diag.set_chain_policy(STRICT);
        diag.error("boom");
        diag.reset();
        assert_eq!(diag.chain_policy(), STRICT);
    }

    #[test]
    fn warnings_do_not_fail_and_take_clears() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag.take_messages(), None);
        diag.warn("first");
        diag.warn("second");
        assert!(diag.is_ok());
        assert_eq!(
            diag.take_messages().as_deref(),
            Some("[WARNING] first\n[WARNING] second")
        );
        assert!(diag.messages().is_empty());
    }

    #[test]
    fn reset_restores_success() {
        let mut diag = Diagnostics::new();
        diag.error("boom");
        assert_eq!(diag.error_count(), 1);
        diag.reset();
        assert!(diag.is_ok());
        assert_eq!(diag.error_count(), 0);
    }
}
