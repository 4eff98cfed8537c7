//! Static catalog of Lloyds transaction type codes.

/// Known type codes and their display names, sorted by code.
const ENTRIES: &[(&str, &str)] = &[
    ("BGC", "Bank Giro Credit"),
    ("BNS", "Bonus"),
    ("BP", "Bill Payment"),
    ("CHG", "Charge"),
    ("CHQ", "Cheque"),
    ("COM", "Commission"),
    ("COR", "Correction"),
    ("CPT", "Cashpoint"),
    ("CSH", "Cash"),
    ("CSQ", "Cash/Cheque"),
    ("DD", "Direct Debit"),
    ("DEB", "Debit Card"),
    ("DEP", "Deposit"),
    ("EFT", "EFTPOS (electronic funds transfer at point of sale)"),
    ("EUR", "Euro Cheque"),
    ("FE", "Foreign Exchange"),
    ("FEE", "Fixed Service Charge"),
    ("FPC", "Faster Payment charge"),
    ("FPI", "Faster Payment incoming"),
    ("FPO", "Faster Payment outgoing"),
    ("IB", "Internet Banking"),
    ("INT", "Interest"),
    ("MPI", "Mobile Payment incoming"),
    ("MPO", "Mobile Payment outgoing"),
    ("MTG", "Mortgage"),
    ("NS", "National Savings Dividend"),
    ("NSC", "National Savings Certificates"),
    ("OTH", "Other"),
    ("PAY", "Payment"),
    ("PSB", "Premium Savings Bonds"),
    ("PSV", "Paysave"),
    ("SAL", "Salary"),
    ("SO", "Standing Order"),
    ("SPB", "Cashpoint"),
    ("STK", "Stocks/Shares"),
    ("SUR", "Excess Reject"),
    ("TD", "Dep Term Dec"),
    ("TDG", "Term Deposit Gross Interest"),
    ("TDI", "Dep Term Inc"),
    ("TDN", "Term Deposit Net Interest"),
    ("TFR", "Transfer"),
    ("UT", "Unit Trust"),
];

/// Read-only lookup from type code to display name.
///
/// Unknown codes have no label; callers render them with an empty label
/// instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeCodeCatalog;

impl TypeCodeCatalog {
    /// Display name for `code`, if it is a known code
    pub fn label(code: &str) -> Option<&'static str> {
        ENTRIES
            .binary_search_by(|(known, _)| (*known).cmp(code))
            .ok()
            .map(|i| ENTRIES[i].1)
    }

    pub fn contains(code: &str) -> bool {
        Self::label(code).is_some()
    }

    /// All `(code, label)` pairs, ordered by code
    pub fn entries() -> &'static [(&'static str, &'static str)] {
        ENTRIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(TypeCodeCatalog::label("DEB"), Some("Debit Card"));
        assert_eq!(TypeCodeCatalog::label("SO"), Some("Standing Order"));
        assert_eq!(TypeCodeCatalog::label("OTH"), Some("Other"));
        assert_eq!(TypeCodeCatalog::label("SUR"), Some("Excess Reject"));
    }

    #[test]
    fn test_unknown_code_has_no_label() {
        assert_eq!(TypeCodeCatalog::label("XYZ"), None);
        assert_eq!(TypeCodeCatalog::label(""), None);
        // Lookup is case-sensitive
        assert!(!TypeCodeCatalog::contains("deb"));
    }

    #[test]
    fn test_entries_sorted_and_unique() {
        let entries = TypeCodeCatalog::entries();
        assert_eq!(entries.len(), 42);
        for w in entries.windows(2) {
            assert!(w[0].0 < w[1].0, "{} should sort before {}", w[0].0, w[1].0);
        }
    }

    #[test]
    fn test_every_entry_resolves() {
        for (code, label) in TypeCodeCatalog::entries() {
            assert_eq!(TypeCodeCatalog::label(code), Some(*label));
        }
    }
}
