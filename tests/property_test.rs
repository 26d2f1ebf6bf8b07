use proptest::prelude::*;
use sepay_recon::{domain::order::OrderId, extract::Extractor};

fn extract(text: &str) -> Option<OrderId> {
    Extractor::default().extract(text)
}

proptest! {
    /// A bare 32-hex run survives any surrounding non-hex noise,
    /// and comes back lowercased.
    #[test]
    fn bare_hex_survives_noise(
        id in "[0-9a-fA-F]{32}",
        before in "[g-z ]{0,24}",
        after in "[g-z ]{0,24}",
    ) {
        let found = extract(&format!("{before}{id}{after}")).unwrap();
        prop_assert_eq!(found.as_str(), id.to_lowercase());
    }

    /// A well-formed MBVCB envelope always yields its payload, whatever the
    /// transaction number, amount, and trailing text look like.
    #[test]
    fn marker_envelope_yields_its_payload(
        tx in "[0-9]{1,12}",
        amount in "[0-9]{1,9}",
        id in "[0-9a-fA-F]{32}",
        trailer in "[g-z ]{0,40}",
    ) {
        let text = format!("MBVCB.{tx}.{amount}.{id}.CT tu {trailer}");
        let found = extract(&text).unwrap();
        prop_assert_eq!(found.as_str(), id.to_lowercase());
    }

    /// Priority law: when both a bare hex run and a marker envelope are
    /// present, the envelope's payload wins even if the bare run comes first.
    #[test]
    fn marker_beats_bare_hex(
        decoy in "[0-9a-f]{32}",
        id in "[0-9a-f]{32}",
    ) {
        let text = format!("{decoy} roi MBVCB.1.2.{id}.CT tu ai do");
        let found = extract(&text).unwrap();
        prop_assert_eq!(found.as_str(), id);
    }

    /// A lone hyphenated GUID is recovered as-is.
    #[test]
    fn guid_is_the_last_resort(
        a in "[0-9a-f]{8}",
        b in "[0-9a-f]{4}",
        c in "[0-9a-f]{4}",
        d in "[0-9a-f]{4}",
        e in "[0-9a-f]{12}",
    ) {
        let guid = format!("{a}-{b}-{c}-{d}-{e}");
        let found = extract(&format!("don hang {guid} thanh toan")).unwrap();
        prop_assert_eq!(found.as_str(), guid);
    }

    /// Text with no hex digits at all can never produce an identifier,
    /// and extraction never panics on it.
    #[test]
    fn hexless_text_never_matches(text in "[g-zG-Z .,!?-]{0,80}") {
        prop_assert_eq!(extract(&text), None);
    }

    /// OrderId accepts exactly the two documented shapes.
    #[test]
    fn order_id_accepts_32_hex(id in "[0-9a-fA-F]{32}") {
        let parsed = OrderId::new(id.as_str()).unwrap();
        prop_assert_eq!(parsed.as_str(), id.to_lowercase());
    }

    #[test]
    fn order_id_rejects_31_hex(id in "[0-9a-f]{31}") {
        prop_assert!(OrderId::new(id).is_err());
    }
}
