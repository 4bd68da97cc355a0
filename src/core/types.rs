use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully assembled e-invoice document — the unit of validation.
///
/// All derived amounts (line net amounts, tax subtotals, totals) must be
/// computed by the caller before validation; the engine checks consistency
/// but never computes or mutates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Document type code (MyInvois e-Invoice type, e.g. 01 for invoice).
    pub doc_type: DocumentType,
    /// Document type version (e.g. "1.0").
    pub doc_type_version: String,
    /// Invoice number, unique per supplier. 1–50 characters.
    pub number: String,
    /// Issue date and time. Validation reports DOC_003 when absent.
    pub issue_date: Option<NaiveDateTime>,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Document currency (ISO 4217, e.g. "MYR").
    pub currency_code: String,
    /// MYR exchange rate. Required whenever currency_code is not MYR.
    pub exchange_rate: Option<Decimal>,
    /// Reference to the original document. Required for credit, debit
    /// and refund notes (and their self-billed variants).
    pub original_ref: Option<String>,
    /// Issuing party.
    pub supplier: Supplier,
    /// Receiving party.
    pub buyer: Buyer,
    /// Invoice lines, in document order.
    pub lines: Vec<InvoiceLine>,
    /// One entry per distinct (tax type, rate) pair used by the lines.
    pub tax_subtotals: Vec<TaxSubtotal>,
    /// Document totals.
    pub totals: Totals,
    /// Payment means.
    pub payment: Option<PaymentMeans>,
    /// Payment terms free text.
    pub payment_terms: Option<String>,
    /// Free-text notes.
    pub notes: Vec<String>,
}

/// MyInvois e-Invoice type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// 01 — Invoice.
    Invoice,
    /// 02 — Credit note.
    CreditNote,
    /// 03 — Debit note.
    DebitNote,
    /// 04 — Refund note.
    RefundNote,
    /// 11 — Self-billed invoice.
    SelfBilledInvoice,
    /// 12 — Self-billed credit note.
    SelfBilledCreditNote,
    /// 13 — Self-billed debit note.
    SelfBilledDebitNote,
    /// 14 — Self-billed refund note.
    SelfBilledRefundNote,
}

impl DocumentType {
    /// MyInvois document type code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invoice => "01",
            Self::CreditNote => "02",
            Self::DebitNote => "03",
            Self::RefundNote => "04",
            Self::SelfBilledInvoice => "11",
            Self::SelfBilledCreditNote => "12",
            Self::SelfBilledDebitNote => "13",
            Self::SelfBilledRefundNote => "14",
        }
    }

    /// Parse from a MyInvois document type code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Invoice),
            "02" => Some(Self::CreditNote),
            "03" => Some(Self::DebitNote),
            "04" => Some(Self::RefundNote),
            "11" => Some(Self::SelfBilledInvoice),
            "12" => Some(Self::SelfBilledCreditNote),
            "13" => Some(Self::SelfBilledDebitNote),
            "14" => Some(Self::SelfBilledRefundNote),
            _ => None,
        }
    }

    /// True for credit, debit and refund notes — these must carry a
    /// reference to the original document they adjust.
    pub fn requires_original_ref(&self) -> bool {
        !matches!(self, Self::Invoice | Self::SelfBilledInvoice)
    }
}

/// Supplier (issuing party) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Tax Identification Number issued by LHDN.
    pub tin: String,
    /// Business registration number (SSM).
    pub brn: Option<String>,
    /// SST registration number.
    pub sst_no: Option<String>,
    /// Tourism tax registration number.
    pub ttx_no: Option<String>,
    /// Registered legal name. Max 300 characters.
    pub legal_name: String,
    /// Trading name, if different from the legal name.
    pub trading_name: Option<String>,
    /// Registered business address.
    pub address: Address,
    /// Contact channels.
    pub contact: Option<Contact>,
    /// 5-digit MSIC 2008 industry classification code.
    pub msic_code: Option<String>,
    /// Peppol participant identifier, required for network submissions.
    pub peppol_id: Option<ParticipantId>,
}

/// Buyer (receiving party) identity.
///
/// Retail buyers often have no TIN; the generic `id_type`/`id_value`
/// pair covers NRIC, passport and army numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Buyer {
    pub tin: Option<String>,
    pub brn: Option<String>,
    pub id_type: Option<IdType>,
    pub id_value: Option<String>,
    pub name: String,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub peppol_id: Option<ParticipantId>,
}

/// Structured postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postcode: String,
    /// MyInvois state code (e.g. "14" for Kuala Lumpur).
    pub state: Option<String>,
    /// ISO 3166-1 alpha-3 country code (e.g. "MYS").
    pub country: String,
}

/// Contact channels. At least one of phone/email is recommended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Peppol participant identifier with its scheme (e.g. "0230" for
/// the Malaysian TIN scheme).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantId {
    pub scheme: String,
    pub value: String,
}

/// Generic buyer identification document types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdType {
    /// SSM business registration number.
    Brn,
    /// National registration identity card number.
    Nric,
    /// Passport number.
    Passport,
    /// Army service number.
    Army,
}

impl IdType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Brn => "BRN",
            Self::Nric => "NRIC",
            Self::Passport => "PASSPORT",
            Self::Army => "ARMY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "BRN" => Some(Self::Brn),
            "NRIC" => Some(Self::Nric),
            "PASSPORT" => Some(Self::Passport),
            "ARMY" => Some(Self::Army),
            _ => None,
        }
    }
}

/// One invoice line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Line number within the document.
    pub line_no: u32,
    /// Product or service name.
    pub product_name: String,
    /// Longer description.
    pub description: Option<String>,
    /// Invoiced quantity. Must be positive.
    pub quantity: Decimal,
    /// UN/CEFACT Rec 20 unit of measure code.
    pub unit_code: String,
    /// Price per unit, before tax. Must not be negative.
    pub unit_price: Decimal,
    /// Line net amount = quantity × unit price.
    pub net_amount: Decimal,
    /// MyInvois tax type code (e.g. "01" sales tax, "E" exempt).
    pub tax_type: String,
    /// Tax rate percentage, 0–100.
    pub tax_rate: Decimal,
    /// Tax amount for this line.
    pub tax_amount: Decimal,
    /// Exemption reason code, expected for exempt/not-applicable lines.
    pub exemption_reason_code: Option<String>,
    /// Exemption reason free text.
    pub exemption_reason: Option<String>,
    /// Product classification code (PTC).
    pub classification: Option<String>,
}

/// Aggregated taxable and tax amounts for one (tax type, rate) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxSubtotal {
    pub tax_type: String,
    pub tax_rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}

/// Document totals, as declared by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line net amounts.
    pub line_extension: Decimal,
    /// Total excluding tax = line_extension − allowances + charges.
    pub tax_exclusive: Decimal,
    /// Total including tax = tax_exclusive + total_tax.
    pub tax_inclusive: Decimal,
    /// Document-level allowance total.
    pub allowance_total: Option<Decimal>,
    /// Document-level charge total.
    pub charge_total: Option<Decimal>,
    /// Final amount payable. Should equal tax_inclusive barring
    /// jurisdiction-specific rounding adjustments.
    pub payable: Decimal,
    /// Total tax across all lines.
    pub total_tax: Decimal,
}

/// Payment means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMeans {
    pub code: PaymentMeansCode,
    /// Supplier bank account for transfers.
    pub account: Option<String>,
}

/// MyInvois payment means codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMeansCode {
    /// 01 — Cash.
    Cash,
    /// 02 — Cheque.
    Cheque,
    /// 03 — Bank transfer.
    BankTransfer,
    /// 04 — Credit card.
    CreditCard,
    /// 05 — Debit card.
    DebitCard,
    /// 06 — e-Wallet / digital wallet.
    EWallet,
    /// 07 — Digital bank.
    DigitalBank,
    /// 08 — Others.
    Other,
}

impl PaymentMeansCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cash => "01",
            Self::Cheque => "02",
            Self::BankTransfer => "03",
            Self::CreditCard => "04",
            Self::DebitCard => "05",
            Self::EWallet => "06",
            Self::DigitalBank => "07",
            Self::Other => "08",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Cash),
            "02" => Some(Self::Cheque),
            "03" => Some(Self::BankTransfer),
            "04" => Some(Self::CreditCard),
            "05" => Some(Self::DebitCard),
            "06" => Some(Self::EWallet),
            "07" => Some(Self::DigitalBank),
            "08" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Target compliance regime. Activates profile-specific mandatory fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    /// Direct submission to the LHDN MyInvois platform.
    National,
    /// Cross-border submission over the Peppol network.
    Network,
}
