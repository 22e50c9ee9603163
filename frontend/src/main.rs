use yew::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod booking;
mod config;
mod content;
mod components {
    pub mod contact_form;
    pub mod table_of_contents;
    pub mod video_gallery;
}
mod pages {
    pub mod article;
}

use content::AUTHOR_NAME;
use pages::article::Article;

/// Returns whether the listener call succeeded.
fn warn_on_listener_error<E>(action: &str, result: Result<(), E>) -> bool {
    if result.is_err() {
        warn!("Could not {} scroll listener", action);
        return false;
    }
    true
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > f64::from(config::HEADER_SCROLL_THRESHOLD));
                }) as Box<dyn FnMut()>);

                warn_on_listener_error(
                    "attach",
                    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                );
                (window.clone(), scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    warn_on_listener_error(
                        "detach",
                        window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor jumps still happen, only the menu closes.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">
                    <span class="nav-monogram">{"ZA"}</span>
                    <span class="nav-name">{AUTHOR_NAME}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    <a href="#inicio" class="nav-link" onclick={close_menu.clone()}>{"Artigo"}</a>
                    <a href="#autor" class="nav-link" onclick={close_menu.clone()}>{"Sobre"}</a>
                    <a href="#recursos" class="nav-link" onclick={close_menu}>{"Recursos"}</a>
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #e2e8f0;
                    transition: box-shadow 0.3s ease, padding 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .top-nav.scrolled .nav-content {
                    padding: 0.6rem 1.5rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: #0f172a;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .nav-monogram {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #2563eb, #0d9488);
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1rem;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #475569;
                    font-size: 0.9rem;
                    font-weight: 500;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #2563eb;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #0f172a;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem 1.5rem;
                        background: #fff;
                        border-bottom: 1px solid #e2e8f0;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    info!("Rendering article page");
    html! {
        <>
            <Header />
            <Article />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listener_failures_are_reported_not_swallowed() {
        assert!(warn_on_listener_error::<()>("attach", Ok(())));
        assert!(!warn_on_listener_error("detach", Err(())));
    }
}
