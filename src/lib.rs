//! # myinvois
//!
//! Compliance validation engine for Malaysian e-invoices: certifies
//! whether a fully assembled invoice, credit, debit or refund note
//! satisfies the structural, numeric and regulatory rules required
//! before submission to the LHDN MyInvois platform or the Peppol
//! network.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. The engine is a pure function of its inputs: no I/O, no
//! shared state, safe to call concurrently from any number of callers.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use myinvois::core::*;
//! use rust_decimal_macros::dec;
//!
//! let doc = DocumentBuilder::new("INV-2024-001")
//!     .issue_date(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap().and_hms_opt(9, 0, 0).unwrap())
//!     .supplier(Supplier {
//!         tin: "C123456789012".into(),
//!         brn: Some("202001012345".into()),
//!         sst_no: None,
//!         ttx_no: None,
//!         legal_name: "Contoh Sdn Bhd".into(),
//!         trading_name: None,
//!         address: Address {
//!             street: "12 Jalan Ampang".into(),
//!             city: "Kuala Lumpur".into(),
//!             postcode: "50450".into(),
//!             state: Some("14".into()),
//!             country: "MYS".into(),
//!         },
//!         contact: Some(Contact { phone: Some("+60312345678".into()), email: None }),
//!         msic_code: Some("62010".into()),
//!         peppol_id: None,
//!     })
//!     .buyer(Buyer { name: "Pembeli Enterprise".into(), tin: Some("C210987654321".into()), ..Buyer::default() })
//!     .add_line(InvoiceLine {
//!         line_no: 1,
//!         product_name: "Consulting services".into(),
//!         description: None,
//!         quantity: dec!(1),
//!         unit_code: "C62".into(),
//!         unit_price: dec!(100),
//!         net_amount: dec!(100),
//!         tax_type: "02".into(),
//!         tax_rate: dec!(0),
//!         tax_amount: dec!(0),
//!         exemption_reason_code: None,
//!         exemption_reason: None,
//!         classification: None,
//!     })
//!     .add_tax_subtotal(TaxSubtotal {
//!         tax_type: "02".into(),
//!         tax_rate: dec!(0),
//!         taxable_amount: dec!(100),
//!         tax_amount: dec!(0),
//!     })
//!     .totals(Totals {
//!         line_extension: dec!(100),
//!         tax_exclusive: dec!(100),
//!         tax_inclusive: dec!(100),
//!         allowance_total: None,
//!         charge_total: None,
//!         payable: dec!(100),
//!         total_tax: dec!(0),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let result = validate(&doc, &EngineConfig::default(), Profile::National);
//! assert!(result.is_valid);
//! ```

pub mod core;

// Re-export core types at crate root for convenience
pub use crate::core::*;
