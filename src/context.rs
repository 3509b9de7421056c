//! Application Context
//!
//! Navigation, toasts, and the search overlay flag, provided to every
//! component via the Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Where in the app the user currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Blog,
    BlogPost(u32),
    Workouts,
    WorkoutDetail(u32),
    Store,
    Contact,
}

impl Route {
    /// The nav section a route belongs to (detail pages highlight
    /// their parent link)
    pub fn section(&self) -> Route {
        match self {
            Route::BlogPost(_) => Route::Blog,
            Route::WorkoutDetail(_) => Route::Workouts,
            other => *other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification banner
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

const TOAST_DISMISS_MS: u32 = 3000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    pub toast: ReadSignal<Option<Toast>>,
    set_toast: WriteSignal<Option<Toast>>,
    pub search_open: ReadSignal<bool>,
    set_search_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        let (route, set_route) = signal(Route::Home);
        let (toast, set_toast) = signal(None::<Toast>);
        let (search_open, set_search_open) = signal(false);
        Self {
            route,
            set_route,
            toast,
            set_toast,
            search_open,
            set_search_open,
        }
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        self.set_search_open.set(false);
    }

    /// Show a toast and schedule its dismissal. The id guard keeps an
    /// old timer from dismissing a newer toast.
    pub fn show_toast(&self, kind: ToastKind, message: impl Into<String>) {
        let set_toast = self.set_toast;
        let mut id = 0;
        set_toast.update(|slot| {
            id = slot.as_ref().map(|t| t.id + 1).unwrap_or(0);
            *slot = Some(Toast {
                id,
                kind,
                message: message.into(),
            });
        });
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toast.try_update(|slot| {
                if slot.as_ref().is_some_and(|t| t.id == id) {
                    *slot = None;
                }
            });
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }

    pub fn open_search(&self) {
        self.set_search_open.set(true);
    }

    pub fn close_search(&self) {
        self.set_search_open.set(false);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the app context from context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
