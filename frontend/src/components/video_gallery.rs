use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{videos_matching, Video, VideoCategory, VideoFilter, VIDEOS, YOUTUBE_CHANNEL};

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: Video,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;

    html! {
        <div class="video-card">
            <div class="video-card-tag">
                <span>{video.category.label()}</span>
            </div>
            <div class="video-frame">
                <iframe
                    src={config::youtube_embed_url(video.id)}
                    title={video.title}
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen={true}
                />
            </div>
            <div class="video-info">
                <h3>{video.title}</h3>
                <p>{video.description}</p>
                <div class="video-meta">
                    <span>{format!("⏱️ {}", video.duration)}</span>
                    <a href={config::youtube_watch_url(video.id)} target="_blank" rel="noopener noreferrer">
                        {"Ver no YouTube →"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(VideoGallery)]
pub fn video_gallery() -> Html {
    let filter = use_state(|| None::<VideoCategory>);

    let chip = |selection: VideoFilter, label: String| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                filter.set(selection);
            })
        };
        html! {
            <button class={classes!("video-chip", (*filter == selection).then(|| "selected"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <section id="videos" class="article-card">
            <h2>{"Vídeos Complementares"}</h2>
            <p class="section-lead">
                {"Assista aos vídeos abaixo para aprofundar ainda mais seu conhecimento sobre adicção como doença cerebral. Estes conteúdos complementam as informações apresentadas neste artigo."}
            </p>

            <div class="video-chips">
                { chip(None, format!("Todos ({})", VIDEOS.len())) }
                { for VideoCategory::ALL.iter().map(|category| chip(Some(*category), category.label().to_string())) }
            </div>

            <div class="video-grid">
                { for videos_matching(*filter).into_iter().map(|video| html! {
                    <VideoCard key={video.id} video={*video} />
                }) }
            </div>

            <div class="video-placeholder">
                <span class="video-placeholder-icon">{"🎬"}</span>
                <p>{"Mais vídeos em breve!"}</p>
                <p class="video-placeholder-note">
                    {"Inscreva-se no canal para não perder os próximos conteúdos sobre adicção, recuperação e saúde mental."}
                </p>
                <a href={YOUTUBE_CHANNEL} target="_blank" rel="noopener noreferrer" class="subscribe-button">
                    {"Inscrever-se no YouTube"}
                </a>
            </div>
        </section>
    }
}
