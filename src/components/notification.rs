use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::referral::flow::{Notice, NoticeKind};

pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, notice });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                queue.push(notice);
            }
            ToastAction::Dismiss(id) => queue.dismiss(id),
        }
        Rc::new(queue)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        }, id);
    }

    let onclick = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let (class, icon) = match props.toast.notice.kind {
        NoticeKind::Success => ("toast toast-success", "✓"),
        NoticeKind::Error => ("toast toast-error", "✕"),
    };

    html! {
        <div class={class} role="status" onclick={onclick}>
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{&props.toast.notice.message}</span>
        </div>
    }
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        top: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        z-index: 1000;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(-100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1.25rem;
                        border-radius: 8px;
                        background: #fff;
                        color: #1f2937;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        animation: toastIn 0.3s ease-out forwards;
                    }
                    .toast-success .toast-icon { color: #16a34a; }
                    .toast-error .toast-icon { color: #dc2626; }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}
