use yew::prelude::*;
use log::{info, Level};

mod config;
mod referral {
    pub mod models;
    pub mod form;
    pub mod client;
    pub mod flow;
}
mod components {
    pub mod notification;
    pub mod refer_modal;
    pub mod navbar;
    pub mod hero;
    pub mod program_list;
}

use components::{
    notification::{ToastAction, ToastQueue, Toaster},
    refer_modal::ReferModal,
    navbar::Nav,
    hero::Hero,
    program_list::ProgramList,
};
use referral::flow::Notice;


#[function_component]
fn App() -> Html {
    let show_refer = use_state(|| false);
    let toasts = use_reducer(ToastQueue::default);

    let open_refer = {
        let show_refer = show_refer.clone();
        Callback::from(move |_| {
            info!("Opening referral modal");
            show_refer.set(true);
        })
    };

    let close_refer = {
        let show_refer = show_refer.clone();
        Callback::from(move |_| show_refer.set(false))
    };

    let notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice)))
    };

    let dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <>
            <Toaster toasts={toasts.toasts().to_vec()} on_dismiss={dismiss} />
            <Nav on_refer={open_refer.clone()} />
            <main class="landing-page">
                <Hero on_refer={open_refer.clone()} />
                <ProgramList on_refer={open_refer} />
            </main>
            <ReferModal is_open={*show_refer} on_close={close_refer} on_notify={notify} />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, backend at {:?}", config::get_backend_url());
    yew::Renderer::<App>::new().render();
}
