use yew::prelude::*;

use crate::reveal::{self, use_reveal};

#[derive(Properties, PartialEq)]
pub struct SlideProps {
    /// Anchor id; doubles as the scroll-spy section id.
    pub id: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-viewport slide shell. The body starts translated and transparent and
/// transitions to its resting state the first time the slide scrolls into
/// view; the reveal is one-way, so scrolling back up does not replay it.
#[function_component(Slide)]
pub fn slide(props: &SlideProps) -> Html {
    let root = use_node_ref();
    let revealed = use_reveal(root.clone(), reveal::DEFAULT_THRESHOLD);

    html! {
        <section id={props.id} ref={root} class={classes!("slide", props.class.clone())}>
            <div class={classes!("slide-body", revealed.then(|| "revealed"))}>
                { for props.children.iter() }
            </div>
        </section>
    }
}
