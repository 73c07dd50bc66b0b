use yew::prelude::*;

use crate::referral::models::Course;

#[derive(Properties, PartialEq)]
pub struct ProgramListProps {
    pub on_refer: Callback<()>,
}

#[function_component(ProgramList)]
pub fn program_list(props: &ProgramListProps) -> Html {
    html! {
        <section id="programs" class="programs">
            <h2>{"Explore Our Programs"}</h2>
            <div class="programs-grid">
                { for Course::ALL.iter().map(|course| {
                    let on_refer = props.on_refer.clone();
                    html! {
                        <div class="program-card" key={course.value()}>
                            <h3>{course.label()}</h3>
                            <p>{course.blurb()}</p>
                            <button class="program-refer" onclick={Callback::from(move |_: MouseEvent| on_refer.emit(()))}>
                                {"Refer"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
