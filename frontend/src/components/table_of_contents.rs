use log::debug;
use yew::prelude::*;

use crate::content::{TocEntry, INITIAL_SECTION, TABLE_OF_CONTENTS};

/// Sidebar index. Highlights whichever entry was clicked last; it does not
/// follow the scroll position.
#[function_component(TableOfContents)]
pub fn table_of_contents() -> Html {
    let active_section = use_state(|| INITIAL_SECTION);

    html! {
        <aside class="toc-sidebar">
            <div class="toc-card">
                <h2>{"Índice"}</h2>
                <nav class="toc-links">
                    { for TABLE_OF_CONTENTS.iter().map(|entry| {
                        let TocEntry { id, label } = *entry;
                        let onclick = {
                            let active_section = active_section.clone();
                            Callback::from(move |_: MouseEvent| {
                                debug!("Active section -> {}", id);
                                active_section.set(id);
                            })
                        };
                        html! {
                            <a
                                key={id}
                                href={format!("#{}", id)}
                                class={classes!("toc-link", (*active_section == id).then(|| "active"))}
                                {onclick}
                            >
                                {label}
                            </a>
                        }
                    }) }
                </nav>
            </div>
        </aside>
    }
}
