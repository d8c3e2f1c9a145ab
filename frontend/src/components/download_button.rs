use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    /// Only shown after a successful validation
    pub visible: bool,
    pub downloading: bool,
    pub on_click: Callback<()>,
}

#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };
    let style = if props.visible {
        "display: inline-block"
    } else {
        "display: none"
    };

    html! {
        <button
            type="button"
            id="downloadPdfBtn"
            class="btn btn-primary download-pdf-btn"
            {style}
            {onclick}
            disabled={props.downloading}
        >
            {if props.downloading {
                "Generating PDF..."
            } else {
                "📄 Download PDF Report"
            }}
        </button>
    }
}
