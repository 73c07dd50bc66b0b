use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_refer: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_refer = {
        let on_refer = props.on_refer.clone();
        Callback::from(move |_: MouseEvent| on_refer.emit(()))
    };

    html! {
        <section class="hero">
            <h1>{"Let's Learn & Earn"}</h1>
            <p class="hero-subtitle">
                {"Know someone who wants to get into tech? Refer them to one of our programs."}
            </p>
            <button class="hero-cta" onclick={on_refer}>
                {"Refer Now"}
            </button>
        </section>
    }
}
