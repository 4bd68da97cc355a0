use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::MyInvoisError;
use super::types::*;

/// Builder for assembling an [`InvoiceDocument`].
///
/// The builder only enforces the call contract (a document needs a
/// supplier and a buyer); compliance problems are the validator's job,
/// so `build()` succeeds even for documents that will fail validation.
///
/// ```
/// use chrono::NaiveDate;
/// use myinvois::core::*;
/// use rust_decimal_macros::dec;
///
/// let doc = DocumentBuilder::new("INV-2024-001")
///     .issue_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(9, 0, 0).unwrap())
///     .supplier(Supplier {
///         tin: "C123456789012".into(),
///         brn: None,
///         sst_no: None,
///         ttx_no: None,
///         legal_name: "Contoh Sdn Bhd".into(),
///         trading_name: None,
///         address: Address {
///             street: "12 Jalan Ampang".into(),
///             city: "Kuala Lumpur".into(),
///             postcode: "50450".into(),
///             state: Some("14".into()),
///             country: "MYS".into(),
///         },
///         contact: None,
///         msic_code: Some("62010".into()),
///         peppol_id: None,
///     })
///     .buyer(Buyer { name: "Pembeli Enterprise".into(), ..Buyer::default() })
///     .add_line(InvoiceLine {
///         line_no: 1,
///         product_name: "Consulting".into(),
///         description: None,
///         quantity: dec!(1),
///         unit_code: "C62".into(),
///         unit_price: dec!(100),
///         net_amount: dec!(100),
///         tax_type: "02".into(),
///         tax_rate: dec!(0),
///         tax_amount: dec!(0),
///         exemption_reason_code: None,
///         exemption_reason: None,
///         classification: None,
///     })
///     .totals(Totals {
///         line_extension: dec!(100),
///         tax_exclusive: dec!(100),
///         tax_inclusive: dec!(100),
///         allowance_total: None,
///         charge_total: None,
///         payable: dec!(100),
///         total_tax: dec!(0),
///     })
///     .build()
///     .unwrap();
/// assert_eq!(doc.number, "INV-2024-001");
/// ```
pub struct DocumentBuilder {
    doc_type: DocumentType,
    doc_type_version: String,
    number: String,
    issue_date: Option<NaiveDateTime>,
    due_date: Option<NaiveDate>,
    currency_code: String,
    exchange_rate: Option<Decimal>,
    original_ref: Option<String>,
    supplier: Option<Supplier>,
    buyer: Option<Buyer>,
    lines: Vec<InvoiceLine>,
    tax_subtotals: Vec<TaxSubtotal>,
    totals: Option<Totals>,
    payment: Option<PaymentMeans>,
    payment_terms: Option<String>,
    notes: Vec<String>,
}

impl DocumentBuilder {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            doc_type: DocumentType::Invoice,
            doc_type_version: "1.0".to_string(),
            number: number.into(),
            issue_date: None,
            due_date: None,
            currency_code: "MYR".to_string(),
            exchange_rate: None,
            original_ref: None,
            supplier: None,
            buyer: None,
            lines: Vec::new(),
            tax_subtotals: Vec::new(),
            totals: None,
            payment: None,
            payment_terms: None,
            notes: Vec::new(),
        }
    }

    pub fn doc_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = doc_type;
        self
    }

    pub fn issue_date(mut self, date: NaiveDateTime) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn exchange_rate(mut self, rate: Decimal) -> Self {
        self.exchange_rate = Some(rate);
        self
    }

    pub fn original_ref(mut self, reference: impl Into<String>) -> Self {
        self.original_ref = Some(reference.into());
        self
    }

    pub fn supplier(mut self, supplier: Supplier) -> Self {
        self.supplier = Some(supplier);
        self
    }

    pub fn buyer(mut self, buyer: Buyer) -> Self {
        self.buyer = Some(buyer);
        self
    }

    pub fn add_line(mut self, line: InvoiceLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn add_tax_subtotal(mut self, subtotal: TaxSubtotal) -> Self {
        self.tax_subtotals.push(subtotal);
        self
    }

    pub fn totals(mut self, totals: Totals) -> Self {
        self.totals = Some(totals);
        self
    }

    pub fn payment(mut self, payment: PaymentMeans) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn payment_terms(mut self, terms: impl Into<String>) -> Self {
        self.payment_terms = Some(terms.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Assemble the document. Fails only on missing required parts —
    /// a programming-contract violation, not a validation outcome.
    pub fn build(self) -> Result<InvoiceDocument, MyInvoisError> {
        let supplier = self
            .supplier
            .ok_or_else(|| MyInvoisError::Builder("supplier is required".to_string()))?;
        let buyer = self
            .buyer
            .ok_or_else(|| MyInvoisError::Builder("buyer is required".to_string()))?;
        let totals = self
            .totals
            .ok_or_else(|| MyInvoisError::Builder("totals are required".to_string()))?;

        Ok(InvoiceDocument {
            doc_type: self.doc_type,
            doc_type_version: self.doc_type_version,
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            currency_code: self.currency_code,
            exchange_rate: self.exchange_rate,
            original_ref: self.original_ref,
            supplier,
            buyer,
            lines: self.lines,
            tax_subtotals: self.tax_subtotals,
            totals,
            payment: self.payment,
            payment_terms: self.payment_terms,
            notes: self.notes,
        })
    }
}
