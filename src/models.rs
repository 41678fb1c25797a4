use std::fmt;

/// A bank the customer can transfer the remaining balance to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankAccount {
    pub name_ar: &'static str,
    pub name_en: &'static str,
    pub account_number: &'static str,
    pub iban: Option<&'static str>,
}

pub const BANQUE_MISR: BankAccount = BankAccount {
    name_ar: "بنك مصر",
    name_en: "Banque MISR",
    account_number: "4620001000000980",
    iban: Some("EG860002046204620001000000980"),
};

pub const SAIB: BankAccount = BankAccount {
    name_ar: "بنك سايب",
    name_en: "S.A.I.B Bank",
    account_number: "0420302699610010",
    iban: None,
};

pub const ACCOUNT_HOLDER_AR: &str = "نجيب سليم وشركاه";
pub const ACCOUNT_HOLDER_EN: &str = "Naguib Selim & Co.";

/// Identifies one collapsible payment-method section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Misr,
    Saib,
    Instapay,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Misr, Panel::Saib, Panel::Instapay];

    pub fn id(&self) -> &'static str {
        match self {
            Panel::Misr => "misr",
            Panel::Saib => "saib",
            Panel::Instapay => "instapay",
        }
    }

    pub fn title_ar(&self) -> &'static str {
        match self {
            Panel::Misr => BANQUE_MISR.name_ar,
            Panel::Saib => SAIB.name_ar,
            Panel::Instapay => "انستاباي",
        }
    }

    pub fn title_en(&self) -> &'static str {
        match self {
            Panel::Misr => BANQUE_MISR.name_en,
            Panel::Saib => SAIB.name_en,
            Panel::Instapay => "Instapay",
        }
    }

    /// Instapay repeats the payment notice above its rows.
    pub fn shows_notice(&self) -> bool {
        matches!(self, Panel::Instapay)
    }

    /// The copyable rows shown while the panel is expanded.
    pub fn fields(&self) -> Vec<CopyField> {
        match self {
            Panel::Misr => {
                let mut fields = vec![CopyField {
                    label: "رقم الحساب • Account Number",
                    value: BANQUE_MISR.account_number,
                    key: CopyKey::MisrAccount,
                }];
                if let Some(iban) = BANQUE_MISR.iban {
                    fields.push(CopyField {
                        label: "IBAN",
                        value: iban,
                        key: CopyKey::MisrIban,
                    });
                }
                fields
            }
            Panel::Saib => vec![CopyField {
                label: "رقم الحساب • Account Number",
                value: SAIB.account_number,
                key: CopyKey::SaibAccount,
            }],
            Panel::Instapay => vec![
                CopyField {
                    label: "بنك مصر • Bank MISR",
                    value: BANQUE_MISR.account_number,
                    key: CopyKey::InstapayMisr,
                },
                CopyField {
                    label: "بنك سايب • S.A.I.B Bank",
                    value: SAIB.account_number,
                    key: CopyKey::InstapaySaib,
                },
            ],
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Names the text field that was last put on the clipboard.
///
/// The same literal can sit behind several keys (Instapay repeats both
/// account numbers), each with its own badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyKey {
    MisrAccount,
    MisrIban,
    SaibAccount,
    InstapayMisr,
    InstapaySaib,
    AccountNameArabic,
    AccountNameEnglish,
}

impl CopyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyKey::MisrAccount => "misr-account",
            CopyKey::MisrIban => "misr-iban",
            CopyKey::SaibAccount => "saib-account",
            CopyKey::InstapayMisr => "instapay-misr",
            CopyKey::InstapaySaib => "instapay-saib",
            CopyKey::AccountNameArabic => "account-name-arabic",
            CopyKey::AccountNameEnglish => "account-name-english",
        }
    }
}

impl fmt::Display for CopyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (label, value, copy action) row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyField {
    pub label: &'static str,
    pub value: &'static str,
    pub key: CopyKey,
}

pub fn account_holder_fields() -> [CopyField; 2] {
    [
        CopyField {
            label: "بالعربية • Arabic",
            value: ACCOUNT_HOLDER_AR,
            key: CopyKey::AccountNameArabic,
        },
        CopyField {
            label: "بالإنجليزية • English",
            value: ACCOUNT_HOLDER_EN,
            key: CopyKey::AccountNameEnglish,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn every_field() -> Vec<CopyField> {
        let mut fields: Vec<CopyField> = Panel::ALL.iter().flat_map(|p| p.fields()).collect();
        fields.extend(account_holder_fields());
        fields
    }

    #[test]
    fn copy_keys_are_unique_across_the_page() {
        let fields = every_field();
        let keys: HashSet<&str> = fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys.len(), fields.len());
        assert_eq!(fields.len(), 7);
    }

    #[test]
    fn misr_panel_copies_account_number_and_iban_literally() {
        let fields = Panel::Misr.fields();
        assert_eq!(fields[0].value, "4620001000000980");
        assert_eq!(fields[0].key.as_str(), "misr-account");
        assert_eq!(fields[1].value, "EG860002046204620001000000980");
        assert_eq!(fields[1].key, CopyKey::MisrIban);
    }

    #[test]
    fn saib_has_no_iban_row() {
        let fields = Panel::Saib.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, "0420302699610010");
    }

    #[test]
    fn instapay_lists_both_banks_under_its_own_keys() {
        let fields = Panel::Instapay.fields();
        let values: Vec<&str> = fields.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![BANQUE_MISR.account_number, SAIB.account_number]);
        assert!(fields.iter().all(|f| f.key.as_str().starts_with("instapay-")));
        assert!(Panel::Instapay.shows_notice());
        assert!(!Panel::Misr.shows_notice());
    }

    #[test]
    fn panel_ids_match_display() {
        let ids: Vec<String> = Panel::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(ids, vec!["misr", "saib", "instapay"]);
    }
}
