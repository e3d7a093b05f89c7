use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct PinnedSectionProps {
    pub id: &'static str,
    pub node_ref: NodeRef,
    /// Viewport heights of scroll the section stays pinned for.
    #[prop_or(config::pin::SCROLL_EXTENT)]
    pub extent: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A spacer tall enough for the reserved scroll, holding a sticky
/// full-viewport section. The spacer carries the anchor id and is what the
/// engine measures.
#[function_component(PinnedSection)]
pub fn pinned_section(props: &PinnedSectionProps) -> Html {
    let height = (1.0 + props.extent) * 100.0;

    html! {
        <div id={props.id} ref={props.node_ref.clone()} class="pin-spacer" style={format!("height: {}vh;", height)}>
            <section class={classes!("section-pinned", props.class.clone())}>
                { for props.children.iter() }
            </section>
        </div>
    }
}
