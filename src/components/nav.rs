use yew::prelude::*;

use crate::components::icons::Icon;
use crate::data;
use crate::scrollspy::use_active_section;

/// Fixed right-hand dot navigation. Exactly one dot is marked active: the
/// section whose span contains the viewport midpoint.
#[function_component(SideNav)]
pub fn side_nav() -> Html {
    let active = use_active_section();

    html! {
        <div class="side-nav">
            { for data::SECTIONS.iter().map(|section| {
                let dot_class = classes!(
                    "nav-dot",
                    (active == section.id).then(|| "active"),
                );
                html! {
                    <a
                        key={section.id}
                        href={format!("#{}", section.id)}
                        class="nav-item"
                        aria-label={section.label}
                    >
                        <span class="nav-tooltip">{ section.label }</span>
                        <span class={dot_class}></span>
                    </a>
                }
            })}
        </div>
    }
}

#[function_component(FloatingContactBtn)]
pub fn floating_contact_btn() -> Html {
    html! {
        <a href="mailto:max@one-ai.fashion" class="floating-contact">
            <Icon name="mail" class="contact-icon" />
            <span>{"Get in Touch"}</span>
        </a>
    }
}
