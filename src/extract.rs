use {crate::domain::order::OrderId, regex::Regex, std::sync::LazyLock};

// Vietcombank reconciliation envelope:
// MBVCB.<tx number>.<amount>.<order id>.CT tu <account> ...
static MARKER_HEX32: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MBVCB\.\d+\.\d+\.([0-9a-fA-F]{32})\.CT").unwrap());

// Upstream occasionally drops the leading character of the payload inside
// the envelope, leaving 31 hex chars. Matched only when repair is enabled.
static MARKER_HEX31: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MBVCB\.\d+\.\d+\.([0-9a-fA-F]{31})\.CT").unwrap());

// Deliberately no word boundaries: bank text glues identifiers onto
// surrounding tokens (`GD677798-...`), so a bounded pattern misses them.
static BARE_HEX32: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9a-fA-F]{32}").unwrap());

static GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}")
        .unwrap()
});

/// Recovers an order identifier from noisy bank-reconciliation text.
///
/// Ordered cascade, first match wins: the structured MBVCB envelope is the
/// bank's own format and the highest-confidence signal, then any bare
/// 32-hex run, then a hyphenated GUID as last resort. Hex matching is
/// case-insensitive throughout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    /// When set, a 31-hex payload inside the MBVCB envelope is repaired by
    /// prepending `'4'`. This fabricates one identifier character to work
    /// around a specific upstream truncation bug, so it is opt-in and off
    /// by default.
    pub repair_truncated: bool,
}

impl Extractor {
    pub fn new(repair_truncated: bool) -> Self {
        Self { repair_truncated }
    }

    pub fn extract(&self, text: &str) -> Option<OrderId> {
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = MARKER_HEX32.captures(text) {
            return OrderId::new(&caps[1]).ok();
        }

        if self.repair_truncated {
            if let Some(caps) = MARKER_HEX31.captures(text) {
                let repaired = format!("4{}", &caps[1]);
                tracing::info!(order_id = %repaired, "repaired truncated 31-char identifier");
                return OrderId::new(repaired).ok();
            }
        }

        if let Some(m) = BARE_HEX32.find(text) {
            return OrderId::new(m.as_str()).ok();
        }

        GUID.find(text).and_then(|m| OrderId::new(m.as_str()).ok())
    }
}
