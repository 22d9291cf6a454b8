use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

/// The ONE wordmark: three circles with "1", "n" and "e" cut out.
#[function_component(OneLogo)]
pub fn one_logo(props: &LogoProps) -> Html {
    html! {
        <svg
            viewBox="0 0 300 100"
            class={classes!("one-logo", props.class.clone())}
            fill="currentColor"
            xmlns="http://www.w3.org/2000/svg"
        >
            <defs>
                <mask id="mask-1">
                    <rect width="300" height="100" fill="white" />
                    <path d="M 20 45 Q 40 22 42 22 L 62 22 L 62 78 L 42 78 L 42 45 Z" fill="black" />
                </mask>
                <mask id="mask-n">
                    <rect width="300" height="100" fill="white" />
                    <path d="M 130 100 L 130 60 A 20 20 0 0 1 170 60 L 170 100 Z" fill="black" />
                </mask>
                <mask id="mask-e">
                    <rect width="300" height="100" fill="white" />
                    <path d="M 300 38 L 245 38 A 12 12 0 0 0 245 62 L 300 62 Z" fill="black" />
                </mask>
            </defs>
            <circle cx="50" cy="50" r="50" mask="url(#mask-1)" />
            <circle cx="150" cy="50" r="50" mask="url(#mask-n)" />
            <circle cx="250" cy="50" r="50" mask="url(#mask-e)" />
        </svg>
    }
}
