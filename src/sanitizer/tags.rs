//! Allow-list tag filtering over the HTML5 tokenizer.
//!
//! Only the tokenizer runs, never tree construction, so text comes out in
//! exactly the order it was written. Table foster-parenting and misnested
//! formatting elements cannot move it.

use std::cell::RefCell;
use std::collections::HashSet;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

/// HTML5 void elements that must not have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Collects text and allowed tags as the tokenizer emits them.
struct TagFilter<'a> {
    allowed: &'a HashSet<String>,
    out: RefCell<String>,
}

impl TagFilter<'_> {
    fn push_tag(&self, tag: &Tag) {
        let name: &str = &tag.name;
        let mut out = self.out.borrow_mut();
        match tag.kind {
            TagKind::StartTag => {
                out.push('<');
                out.push_str(name);
                for attr in &tag.attrs {
                    out.push(' ');
                    out.push_str(&attr.name.local);
                    out.push_str("=\"");
                    out.push_str(&attr.value.replace('&', "&amp;").replace('"', "&quot;"));
                    out.push('"');
                }
                out.push('>');
            }
            TagKind::EndTag if !VOID_ELEMENTS.contains(&name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            TagKind::EndTag => {}
        }
    }
}

/// Content model a start tag switches the tokenizer into, as the tree
/// builder would in body context.
fn content_model(name: &str) -> TokenSinkResult<()> {
    match name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "textarea" | "title" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

impl TokenSink for TagFilter<'_> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => self.out.borrow_mut().push_str(&text),
            Token::TagToken(tag) => {
                if self.allowed.contains(&*tag.name) {
                    self.push_tag(&tag);
                }
                if tag.kind == TagKind::StartTag {
                    return content_model(&tag.name);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Remove every tag from `html` except those named in `allowed`.
///
/// Disallowed tags go, text between them stays in source order.
/// Comments and doctypes are dropped. Text is emitted decoded, so `&amp;`
/// comes out as `&`; callers escape the result afterwards.
///
/// `allowed` holds lower-case tag names.
pub(crate) fn strip_tags(html: &str, allowed: &HashSet<String>) -> String {
    let filter = TagFilter {
        allowed,
        out: RefCell::new(String::with_capacity(html.len())),
    };
    let tokenizer = Tokenizer::new(filter, TokenizerOpts::default());

    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    // The sink never hands back a script, so feeding always runs to the end.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.out.take()
}
