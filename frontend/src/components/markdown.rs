//! Markdown rendering for agent chat bodies.
//!
//! Covers the subset agents emit: paragraphs, emphasis, inline and
//! fenced code, links, lists, and blockquotes.

use pulldown_cmark::{Event, Options, Parser, Tag};
use yew::prelude::*;

/// Render a markdown body as Yew Html.
pub fn render_markdown(text: &str) -> Html {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);

    // Stack of open containers; children accumulate at the top. The
    // bottom entry collects the finished top-level nodes.
    let mut stack: Vec<(Option<Tag>, Vec<Html>)> = vec![(None, Vec::new())];

    for event in parser {
        match event {
            Event::Start(tag) => stack.push((Some(tag), Vec::new())),
            Event::End(_) => {
                // The root accumulator never closes
                if stack.len() > 1 {
                    if let Some((tag, children)) = stack.pop() {
                        let inner = html! { <>{ for children }</> };
                        let rendered = match tag {
                            Some(tag) => close_tag(tag, inner),
                            None => inner,
                        };
                        if let Some((_, parent)) = stack.last_mut() {
                            parent.push(rendered);
                        }
                    }
                }
            }
            Event::Text(text) => push_leaf(&mut stack, html! { <>{ text.to_string() }</> }),
            Event::Code(code) => push_leaf(
                &mut stack,
                html! { <code class="md-inline-code">{ code.to_string() }</code> },
            ),
            Event::SoftBreak => push_leaf(&mut stack, html! { <>{ " " }</> }),
            Event::HardBreak => push_leaf(&mut stack, html! { <br /> }),
            Event::Rule => push_leaf(&mut stack, html! { <hr class="md-rule" /> }),
            _ => {}
        }
    }

    let roots = stack.pop().map(|(_, roots)| roots).unwrap_or_default();
    html! { <>{ for roots }</> }
}

fn push_leaf(stack: &mut Vec<(Option<Tag>, Vec<Html>)>, node: Html) {
    if let Some((_, children)) = stack.last_mut() {
        children.push(node);
    }
}

fn close_tag(tag: Tag, inner: Html) -> Html {
    match tag {
        Tag::Paragraph => html! { <p class="md-paragraph">{ inner }</p> },
        // Transcript bubbles flatten heading levels
        Tag::Heading { .. } => html! { <h4 class="md-heading">{ inner }</h4> },
        Tag::BlockQuote(_) => html! { <blockquote class="md-blockquote">{ inner }</blockquote> },
        Tag::CodeBlock(_) => html! { <pre class="md-code-block">{ inner }</pre> },
        Tag::List(Some(start)) => {
            html! { <ol class="md-list" start={start.to_string()}>{ inner }</ol> }
        }
        Tag::List(None) => html! { <ul class="md-list">{ inner }</ul> },
        Tag::Item => html! { <li class="md-list-item">{ inner }</li> },
        Tag::Emphasis => html! { <em>{ inner }</em> },
        Tag::Strong => html! { <strong>{ inner }</strong> },
        Tag::Strikethrough => html! { <del>{ inner }</del> },
        Tag::Link { dest_url, .. } => html! {
            <a
                href={dest_url.to_string()}
                target="_blank"
                rel="noopener noreferrer"
                class="md-link"
            >
                { inner }
            </a>
        },
        _ => inner,
    }
}
