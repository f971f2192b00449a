use railease_shared::{Media, MediaKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MediaAttachmentProps {
    pub media: Media,
}

/// One attachment: an inline player or image picked from the MIME prefix,
/// followed by a link to the raw URL. Unknown kinds get the link alone.
#[function_component(MediaAttachment)]
pub fn media_attachment(props: &MediaAttachmentProps) -> Html {
    let media = &props.media;

    let body = match media.kind() {
        MediaKind::Image => html! {
            <>
                <img src={media.url.clone()} alt="Complaint Media" class="max-w-md rounded mb-2" />
                if let Some(summary) = media.summary() {
                    <p><strong>{"Summary:"}</strong>{" "}{summary}</p>
                }
            </>
        },
        MediaKind::Audio => html! {
            <>
                <audio controls=true class="mb-2">
                    <source src={media.url.clone()} type={media.media_type.clone()} />
                    {"Your browser does not support the audio element."}
                </audio>
                <Transcript text={media.transcript().map(str::to_string)} />
            </>
        },
        MediaKind::Video => html! {
            <>
                <video controls=true class="max-w-md mb-2">
                    <source src={media.url.clone()} type={media.media_type.clone()} />
                    {"Your browser does not support the video tag."}
                </video>
                <Transcript text={media.transcript().map(str::to_string)} />
            </>
        },
        MediaKind::Link => html! {},
    };

    html! {
        <li class="mb-4">
            {body}
            <a
                href={media.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-500 hover:underline"
            >
                {"View Media"}
            </a>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct TranscriptProps {
    text: Option<String>,
}

#[function_component(Transcript)]
fn transcript(props: &TranscriptProps) -> Html {
    match &props.text {
        Some(text) => html! {
            <p><strong>{"Transcript:"}</strong>{" "}{text}</p>
        },
        None => html! {},
    }
}
