//! DOM bridge between components and the webview.
//!
//! Dioxus desktop renders into a webview, so layout measurements and window
//! scrolling go through `document::eval`. Two kinds of traffic:
//!
//! - **Layout feeds**: one long-lived script per parallax section that
//!   reports [`LayoutSample`]s on attach, scroll, resize and body layout
//!   changes. Each listener it installs is mirrored by a [`Subscription`]
//!   whose release tells the script to remove that listener.
//! - **Reveal watches**: an IntersectionObserver per element that reports
//!   once, the first time enough of the element scrolls into view. Entrance
//!   animations are gated on that report.
//! - **Navigation**: one-shot probes of an anchor's position and the header
//!   height, followed by a smooth `window.scrollTo`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use dolphin_guide_core::{
    GuideError, GuideResult, LayoutSample, ScrollProbe, SectionStyle, SectionTracker,
    Subscription, SubscriptionSet,
};

/// Listeners installed by the layout feed script, in install order.
const FEED_LISTENERS: [&str; 3] = ["layout", "resize", "scroll"];

/// Listener installed by a reveal watch.
const REVEAL_LISTENER: &str = "reveal";

fn js_string(value: &str) -> GuideResult<String> {
    Ok(serde_json::to_string(value)?)
}

fn bridge_error(err: impl std::fmt::Display) -> GuideError {
    GuideError::Bridge(err.to_string())
}

fn layout_feed_script(section_id: &str, container_id: &str) -> GuideResult<String> {
    Ok(format!(
        r#"
const sectionId = {section};
const containerId = {container};
let seen = false;

const measure = (event) => {{
  if (!document.getElementById(containerId)) return;
  const el = document.getElementById(sectionId);
  if (el) seen = true;
  else if (seen) return;
  dioxus.send({{
    event,
    element_top: el ? el.getBoundingClientRect().top : null,
    scroll_y: window.scrollY || document.documentElement.scrollTop || 0,
    viewport_height: typeof window.innerHeight === "number" ? window.innerHeight : null,
  }});
}};

const onScroll = () => measure("scroll");
const onResize = () => measure("resize");
const observer = typeof ResizeObserver === "function"
  ? new ResizeObserver(() => measure("layout"))
  : null;

if (observer) observer.observe(document.body);
window.addEventListener("resize", onResize);
window.addEventListener("scroll", onScroll, {{ passive: true }});
measure("attach");

const active = new Set({listeners});
while (active.size > 0) {{
  const listener = await dioxus.recv();
  if (!active.delete(listener)) continue;
  if (listener === "layout" && observer) observer.disconnect();
  if (listener === "resize") window.removeEventListener("resize", onResize);
  if (listener === "scroll") window.removeEventListener("scroll", onScroll);
}}
"#,
        section = js_string(section_id)?,
        container = js_string(container_id)?,
        listeners = serde_json::to_string(&FEED_LISTENERS)?,
    ))
}

fn reveal_script(element_id: &str, amount: f64) -> GuideResult<String> {
    Ok(format!(
        r#"
const elementId = {element};
let observer = null;
let released = false;

const start = () => {{
  if (released) return;
  if (typeof IntersectionObserver !== "function") {{
    dioxus.send(true);
    return;
  }}
  const el = document.getElementById(elementId);
  if (!el) {{
    requestAnimationFrame(start);
    return;
  }}
  observer = new IntersectionObserver((entries) => {{
    if (!entries.some((entry) => entry.isIntersecting)) return;
    observer.disconnect();
    dioxus.send(true);
  }}, {{ threshold: {amount} }});
  observer.observe(el);
}};

start();
while ((await dioxus.recv()) !== {listener}) {{}}
released = true;
if (observer) observer.disconnect();
"#,
        element = js_string(element_id)?,
        amount = amount.clamp(0.0, 1.0),
        listener = js_string(REVEAL_LISTENER)?,
    ))
}

/// One subscription per listener; releasing it passes the listener name to
/// `notify`.
fn listener_subscriptions<F>(owner: &str, listeners: &[&'static str], notify: F) -> SubscriptionSet
where
    F: Fn(&'static str) + Clone + 'static,
{
    let mut subscriptions = SubscriptionSet::new(owner);
    for &listener in listeners {
        let notify = notify.clone();
        subscriptions.push(Subscription::new(listener, move || notify(listener)));
    }
    subscriptions
}

fn notify_script(eval: Eval) -> impl Fn(&'static str) + Clone + 'static {
    move |listener| {
        if let Err(e) = eval.send(serde_json::json!(listener)) {
            tracing::debug!(listener, error = %e, "Script already finished");
        }
    }
}

/// Layout feed for one parallax section.
///
/// Owns the section's tracker and its listener subscriptions. Dropping the
/// feed (or calling [`SectionFeed::close`]) detaches the tracker and removes
/// every listener in the webview.
pub struct SectionFeed {
    eval: Eval,
    tracker: RefCell<SectionTracker>,
    subscriptions: RefCell<SubscriptionSet>,
}

impl SectionFeed {
    /// Start the feed script and register its listeners.
    pub fn attach(section_id: &str, container_id: &str) -> GuideResult<Self> {
        let eval = document::eval(&layout_feed_script(section_id, container_id)?);
        let subscriptions = listener_subscriptions(section_id, &FEED_LISTENERS, notify_script(eval));

        tracing::debug!(
            section = section_id,
            listeners = subscriptions.len(),
            "Layout feed attached"
        );
        Ok(Self {
            eval,
            tracker: RefCell::new(SectionTracker::new(section_id)),
            subscriptions: RefCell::new(subscriptions),
        })
    }

    /// Current style without waiting for a sample.
    pub fn style(&self) -> SectionStyle {
        self.tracker.borrow().style()
    }

    /// Wait for the next sample and apply it to the tracker.
    ///
    /// Fails once the feed is closed or the script stops reporting.
    pub async fn next_style(&self) -> GuideResult<SectionStyle> {
        let mut eval = self.eval;
        let sample: LayoutSample = eval.recv().await.map_err(bridge_error)?;
        self.tracker.borrow_mut().observe(sample)
    }

    /// Detach the tracker and release every listener. Idempotent.
    pub fn close(&self) {
        self.tracker.borrow_mut().detach();
        self.subscriptions.borrow_mut().release_all();
    }
}

impl Drop for SectionFeed {
    fn drop(&mut self) {
        self.close();
    }
}

/// Fires once when an element first scrolls into view.
///
/// `amount` is the visible fraction of the element that counts as in view.
/// The observer is disconnected after the first report, on
/// [`RevealWatch::close`], or when the watch is dropped.
pub struct RevealWatch {
    eval: Eval,
    subscriptions: RefCell<SubscriptionSet>,
}

impl RevealWatch {
    pub fn watch(element_id: &str, amount: f64) -> GuideResult<Self> {
        let eval = document::eval(&reveal_script(element_id, amount)?);
        let subscriptions =
            listener_subscriptions(element_id, &[REVEAL_LISTENER], notify_script(eval));
        Ok(Self {
            eval,
            subscriptions: RefCell::new(subscriptions),
        })
    }

    /// Resolve when the element comes into view, then stop observing.
    pub async fn revealed(&self) -> GuideResult<()> {
        let mut eval = self.eval;
        let result = eval.recv::<bool>().await.map(|_| ()).map_err(bridge_error);
        self.close();
        result
    }

    pub fn close(&self) {
        self.subscriptions.borrow_mut().release_all();
    }
}

/// Latch that turns `true` once `element_id` has scrolled into view.
///
/// Starts revealed when the watch cannot be installed, so content is never
/// left hidden.
pub fn use_reveal(element_id: &'static str, amount: f64) -> Signal<bool> {
    let watch = use_hook(move || match RevealWatch::watch(element_id, amount) {
        Ok(watch) => Some(Rc::new(watch)),
        Err(e) => {
            tracing::warn!(element = element_id, error = %e, "Reveal watch unavailable");
            None
        }
    });

    let unwatched = watch.is_none();
    let mut revealed = use_signal(move || unwatched);

    let task_watch = watch.clone();
    use_future(move || {
        let watch = task_watch.clone();
        async move {
            let Some(watch) = watch else { return };
            match watch.revealed().await {
                Ok(()) => revealed.set(true),
                Err(e) => {
                    tracing::debug!(element = element_id, error = %e, "Reveal watch ended");
                }
            }
        }
    });

    use_drop(move || {
        if let Some(watch) = &watch {
            watch.close();
        }
    });

    revealed
}

/// Measure `anchor` and the header in the webview.
pub async fn probe_anchor(anchor: &str) -> GuideResult<ScrollProbe> {
    let script = format!(
        r#"
const target = document.getElementById({anchor});
const header = document.querySelector("header");
return {{
  target_top: target
    ? target.getBoundingClientRect().top - document.body.getBoundingClientRect().top
    : null,
  header_height: header ? header.offsetHeight : null,
}};
"#,
        anchor = js_string(anchor)?,
    );
    document::eval(&script)
        .join::<ScrollProbe>()
        .await
        .map_err(bridge_error)
}

/// Smooth-scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    let top = if top.is_finite() { top } else { 0.0 };
    let script = format!("window.scrollTo({{ top: {top}, behavior: \"smooth\" }});");
    let _ = document::eval(&script);
}

async fn anchor_destination(anchor: &str, margin: f64) -> GuideResult<f64> {
    let probe = probe_anchor(anchor).await?;
    let destination = probe.destination(anchor, margin)?;
    tracing::debug!(anchor, destination, header = probe.header_height(), "Scrolling to anchor");
    Ok(destination)
}

/// What a nav click does once the destination lookup finishes.
#[derive(Debug, Clone, PartialEq)]
enum NavAction {
    ScrollTo(f64),
    /// Target not on the page
    Ignore,
    Fail(String),
}

impl From<GuideResult<f64>> for NavAction {
    fn from(result: GuideResult<f64>) -> Self {
        match result {
            Ok(destination) => NavAction::ScrollTo(destination),
            Err(GuideError::AnchorNotFound(_)) => NavAction::Ignore,
            Err(e) => NavAction::Fail(e.to_string()),
        }
    }
}

/// Scroll so `anchor` sits `margin` px below the header.
///
/// A missing anchor is a no-op; other bridge failures are logged.
pub async fn scroll_to_anchor(anchor: &str, margin: f64) {
    match NavAction::from(anchor_destination(anchor, margin).await) {
        NavAction::ScrollTo(destination) => smooth_scroll_to(destination),
        NavAction::Ignore => {
            tracing::debug!(anchor, "Nav target missing, ignoring click");
        }
        NavAction::Fail(error) => {
            tracing::warn!(anchor, %error, "Navigation failed");
        }
    }
}
