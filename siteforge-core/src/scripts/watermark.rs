//! Provides the watermark injector, which keeps a small attribution badge present in exported documents.
//!
//! The badge is rendered inside a closed shadow root, so the host page's own styles do not bleed into it and its
//!   internal nodes cannot be reached through the regular DOM API. A script with full access can still remove the
//!   host element outright; the injector simply puts it back, both when it observes the removal and on a fixed
//!   interval. This makes removal inconvenient, not impossible: it is best-effort tamper resistance through a
//!   private rendering scope, and not a security boundary.

use crate::scripts::{compact, fill, js_string};

/// The identifier of the element which hosts the badge.
pub const HOST_ID: &str = "cr-stamp-host";

/// The attribute marking a host whose shadow root has been populated.
pub const STAMPED_ATTRIBUTE: &str = "data-cr-stamped";

/// The stylesheet of the badge, scoped to its shadow root.
pub const BADGE_CSS: &str = ".crwm{all:initial;font-family:ui-sans-serif,system-ui,-apple-system,Segoe UI,Roboto;font-size:10px;color:#fff;opacity:.45;background:rgba(0,0,0,.35);padding:6px 8px;border-radius:999px;border:1px solid rgba(255,255,255,.2);backdrop-filter:blur(6px);text-decoration:none;display:inline-flex;gap:6px;align-items:center} .crwm:hover{opacity:.75} @media print{.crwm{display:none}}";

/// The attribution badge and how persistently it is reasserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Watermark {
    /// The link target of the badge.
    pub href: String,
    /// The text of the badge.
    pub label: String,
    /// The time between reassertions, in milliseconds.
    pub interval_ms: u32,
}

/// The contents placed into the host's shadow root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    /// The link target.
    pub href: String,
    /// The link text.
    pub label: String,
    /// The scoped stylesheet.
    pub css: &'static str,
}

/// A document tree in which the badge host can be located and inserted.
///
/// This abstracts the handful of DOM operations the injected script performs.
pub trait HostTree {
    /// Returns `true` if an element with the given identifier is attached to the tree.
    fn contains_host(&self, id: &str) -> bool;

    /// Creates an element with the given identifier and appends it to the body.
    fn append_host(&mut self, id: &str);

    /// Returns `true` if the host element carries the stamped marker.
    fn is_stamped(&self, id: &str) -> bool;

    /// Styles the host, attaches a closed shadow root containing the badge and marks the host as stamped.
    fn stamp(&mut self, id: &str, badge: &Badge);
}

/// The outcome of one [`Watermark::ensure`] pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ensured {
    /// The host was present and stamped; nothing was done.
    Present,
    /// The host was present but empty, and has now been stamped.
    Stamped,
    /// The host was missing, and has been recreated and stamped.
    Reinserted,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            href: "https://github.com/christian-ruuiz/".to_string(),
            label: "created by Christian Ruiz".to_string(),
            interval_ms: 3000,
        }
    }
}

impl Watermark {
    /// Returns the badge placed in the host's shadow root.
    pub fn badge(&self) -> Badge {
        Badge {
            href: self.href.clone(),
            label: self.label.clone(),
            css: BADGE_CSS,
        }
    }

    /// Makes sure the badge host exists in the tree and is stamped.
    ///
    /// This is the behaviour the injected script runs on load, on every tree mutation which removed the host,
    ///   and on every interval tick.
    pub fn ensure(&self, tree: &mut impl HostTree) -> Ensured {
        let reinserted = !tree.contains_host(HOST_ID);

        if reinserted {
            tree.append_host(HOST_ID);
        }

        if tree.is_stamped(HOST_ID) {
            return Ensured::Present;
        }

        tree.stamp(HOST_ID, &self.badge());

        if reinserted {
            Ensured::Reinserted
        } else {
            Ensured::Stamped
        }
    }

    /// Serializes the injector as script text.
    ///
    /// Any error thrown by the script is swallowed, so a hostile host page can never break the page's content
    ///   through it.
    pub fn script(&self) -> String {
        compact(&fill(
            SOURCE,
            &[
                ("HOST_ID", js_string(HOST_ID)),
                ("STAMPED", js_string(STAMPED_ATTRIBUTE)),
                ("HREF", js_string(&self.href)),
                ("LABEL", js_string(&self.label)),
                ("CSS", js_string(BADGE_CSS)),
                ("INTERVAL_MS", self.interval_ms.to_string()),
            ],
        ))
    }
}

/// The script source, mirroring [`Watermark::ensure`].
const SOURCE: &str = r#"
    (function(){
      try {
        var HOST_ID = @HOST_ID@; var STAMPED = @STAMPED@;
        var HREF = @HREF@; var LABEL = @LABEL@; var CSS = @CSS@;
        function ensure(){
          var host = document.getElementById(HOST_ID);
          if (!host) { host = document.createElement('div'); host.id = HOST_ID; document.body.appendChild(host); }
          if (!host.hasAttribute(STAMPED)) {
            host.style.position = 'fixed'; host.style.right = '10px'; host.style.bottom = '10px';
            host.style.zIndex = '2147483647'; host.style.pointerEvents = 'auto'; host.style.userSelect = 'none';
            host.setAttribute('aria-hidden', 'false'); host.setAttribute(STAMPED, '1');
            var root = host.attachShadow({mode: 'closed'});
            var style = document.createElement('style'); style.textContent = CSS;
            var a = document.createElement('a'); a.className = 'crwm'; a.href = HREF; a.target = '_blank';
            a.rel = 'noopener noreferrer'; a.textContent = LABEL;
            root.appendChild(style); root.appendChild(a);
          }
        }
        ensure();
        new MutationObserver(function(){ if (!document.getElementById(HOST_ID)) ensure(); })
          .observe(document.documentElement, {childList: true, subtree: true});
        setInterval(ensure, @INTERVAL_MS@);
      } catch (e) {}
    })();
"#;
