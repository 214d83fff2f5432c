use models::links::{LinkEntry, LinkIcon, LinkText};
use yew::prelude::*;

use crate::i18n::FormattedMessage;

fn icon(icon: LinkIcon) -> Html {
    match icon {
        LinkIcon::FolderOpen => html! {
            <svg class="text-blue" width="18" height="18" viewBox="0 0 24 24" fill="currentColor">
                <path d="M20 6h-8l-2-2H4c-1.1 0-1.99.9-1.99 2L2 18c0 1.1.9 2 2 2h16c1.1 0 2-.9 2-2V8c0-1.1-.9-2-2-2zm0 12H4V8h16v10z" />
            </svg>
        },
    }
}

fn link_text(text: &LinkText) -> Html {
    match text {
        LinkText::Message(id) => html! { <FormattedMessage id={*id} /> },
        LinkText::Literal(text) => html! { <span>{ text.clone() }</span> },
    }
}

#[derive(Properties, PartialEq)]
pub struct LinksGroupProps {
    pub links: Vec<LinkEntry>,
}

#[function_component(LinksGroup)]
pub fn links_group(props: &LinksGroupProps) -> Html {
    html! {
        <ul class="links-group">
        {
            props.links.iter().map(|entry| {
                let text = link_text(&entry.link_text);
                html! {
                    <li key={entry.title.key()}>
                        { icon(entry.icon) }
                        <span class="link-title"><FormattedMessage id={entry.title} /></span>
                        {
                            match entry.link {
                                Some(ref href) => html! {
                                    <a href={href.clone()} target="_blank" rel="noreferrer">{ text }</a>
                                },
                                None => text,
                            }
                        }
                    </li>
                }
            }).collect::<Html>()
        }
        </ul>
    }
}
