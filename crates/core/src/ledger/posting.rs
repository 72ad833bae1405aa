//! Posting functions: business events to journal entries.
//!
//! Every money-moving operation maps to a fixed 2-4 line shape and goes
//! through the entry builder and the store's upsert-by-reference. Account
//! resolution degrades to default labels rather than blocking a post; there
//! is no retry, this is "best effort, always produce an entry".

use chrono::NaiveDate;
use rust_decimal::Decimal;

use minibooks_shared::types::{AccountId, CompanyId, DocumentId};

use crate::chart::{classify, resolve, AccountRole, AccountType, ChartAccount};
use crate::documents::{Expense, Invoice, InvoiceKind, Payment, PaymentMethod};
use crate::ledger::balance::label_matches;

use super::builder::{build, NewJournalEntry, NewJournalLine};
use super::entry::JournalEntry;
use super::error::LedgerError;
use super::store::JournalStore;

/// A resolved line target: id when a real chart account matched, plus the
/// label and type to stamp on the line.
struct LineAccount {
    account_id: Option<AccountId>,
    label: String,
    account_type: AccountType,
}

/// Posts business events for one company against a chart and a store.
pub struct PostingService<'a, S> {
    store: &'a S,
    chart: &'a [ChartAccount],
    company_id: CompanyId,
}

impl<'a, S: JournalStore> PostingService<'a, S> {
    /// Creates a posting service for a company.
    #[must_use]
    pub const fn new(store: &'a S, chart: &'a [ChartAccount], company_id: CompanyId) -> Self {
        Self {
            store,
            chart,
            company_id,
        }
    }

    /// Resolves a role to a line target. Resolution never fails; a
    /// defaulted label is typed via the classifier.
    fn role_account(&self, role: AccountRole) -> LineAccount {
        let resolution = resolve(role, self.chart);
        let label = resolution.label().to_string();
        match self.chart.iter().find(|a| a.label() == label) {
            Some(account) => LineAccount {
                account_id: Some(account.id),
                label,
                account_type: account.account_type,
            },
            None => LineAccount {
                account_id: None,
                account_type: classify(&label).bucket.account_type(),
                label,
            },
        }
    }

    /// Resolves a free-text category label (as found on expenses) to a line
    /// target, preferring the chart account it refers to.
    fn category_account(&self, category: &str) -> LineAccount {
        match self.chart.iter().find(|a| label_matches(a, category)) {
            Some(account) => LineAccount {
                account_id: Some(account.id),
                label: account.label(),
                account_type: account.account_type,
            },
            None => LineAccount {
                account_id: None,
                label: category.to_string(),
                account_type: classify(category).bucket.account_type(),
            },
        }
    }

    /// Cash for cash payments, the default bank account otherwise.
    fn settlement_account(&self, method: PaymentMethod) -> LineAccount {
        match method {
            PaymentMethod::Cash => self.role_account(AccountRole::Cash),
            _ => self.role_account(AccountRole::DefaultBank),
        }
    }

    fn post(
        &self,
        date: NaiveDate,
        reference: String,
        source_document_id: Option<DocumentId>,
        description: String,
        lines: Vec<NewJournalLine>,
    ) -> Result<JournalEntry, LedgerError> {
        let entry = build(NewJournalEntry {
            company_id: self.company_id,
            date,
            reference,
            source_document_id,
            description,
            lines,
        })?;
        Ok(self.store.upsert(entry)?)
    }

    fn debit(target: &LineAccount, amount: Decimal) -> NewJournalLine {
        NewJournalLine::debit(target.account_id, &target.label, target.account_type, amount)
    }

    fn credit(target: &LineAccount, amount: Decimal) -> NewJournalLine {
        NewJournalLine::credit(target.account_id, &target.label, target.account_type, amount)
    }

    /// Posts an issued invoice: debit trade debtors for the total, credit
    /// sales revenue net of tax, credit VAT payable for the tax. A credit
    /// note posts the mirror image.
    pub fn invoice_issued(&self, invoice: &Invoice) -> Result<JournalEntry, LedgerError> {
        let debtors = self.role_account(AccountRole::TradeDebtors);
        let revenue = self.role_account(AccountRole::SalesRevenue);
        let vat = self.role_account(AccountRole::VatPayable);

        let net = invoice.total - invoice.tax_amount;
        let mut lines = Vec::with_capacity(3);
        match invoice.kind {
            InvoiceKind::Invoice => {
                lines.push(Self::debit(&debtors, invoice.total));
                lines.push(Self::credit(&revenue, net));
                if invoice.tax_amount > Decimal::ZERO {
                    lines.push(Self::credit(&vat, invoice.tax_amount));
                }
            }
            InvoiceKind::CreditNote => {
                lines.push(Self::debit(&revenue, net));
                if invoice.tax_amount > Decimal::ZERO {
                    lines.push(Self::debit(&vat, invoice.tax_amount));
                }
                lines.push(Self::credit(&debtors, invoice.total));
            }
        }

        self.post(
            invoice.issue_date,
            invoice.number.clone(),
            Some(DocumentId::from_uuid(invoice.id.into_inner())),
            format!("Invoice {} - {}", invoice.number, invoice.customer),
            lines,
        )
    }

    /// Posts a payment received against an invoice: debit cash/bank, credit
    /// trade debtors.
    pub fn payment_received(
        &self,
        invoice: &Invoice,
        payment: &Payment,
    ) -> Result<JournalEntry, LedgerError> {
        let settlement = self.settlement_account(payment.method);
        let debtors = self.role_account(AccountRole::TradeDebtors);

        self.post(
            payment.date,
            format!("{}-PMT-{}", invoice.number, payment.id),
            Some(DocumentId::from_uuid(invoice.id.into_inner())),
            format!("Payment received for {}", invoice.number),
            vec![
                Self::debit(&settlement, payment.amount),
                Self::credit(&debtors, payment.amount),
            ],
        )
    }

    /// Posts an expense accrual: debit the category for the VAT-exclusive
    /// amount, debit VAT input for the VAT portion, credit trade creditors
    /// for the full amount owed.
    pub fn expense_accrued(&self, expense: &Expense) -> Result<JournalEntry, LedgerError> {
        let category = self.category_account(&expense.category);
        let creditors = self.role_account(AccountRole::TradeCreditors);

        let net = expense.net_amount();
        let vat = expense.amount - net;

        let mut lines = vec![Self::debit(&category, net)];
        if vat > Decimal::ZERO {
            let vat_input = self.role_account(AccountRole::VatInput);
            lines.push(Self::debit(&vat_input, vat));
        }
        lines.push(Self::credit(&creditors, expense.amount));

        self.post(
            expense.date,
            format!("EXP-{}", expense.id),
            Some(DocumentId::from_uuid(expense.id.into_inner())),
            format!("Expense - {}", expense.vendor),
            lines,
        )
    }

    /// Posts a payment of an accrued expense: debit trade creditors, credit
    /// cash/bank.
    pub fn expense_paid(
        &self,
        expense: &Expense,
        payment: &Payment,
    ) -> Result<JournalEntry, LedgerError> {
        let creditors = self.role_account(AccountRole::TradeCreditors);
        let settlement = self.settlement_account(payment.method);

        self.post(
            payment.date,
            format!("EXP-{}-PMT-{}", expense.id, payment.id),
            Some(DocumentId::from_uuid(expense.id.into_inner())),
            format!("Expense payment - {}", expense.vendor),
            vec![
                Self::debit(&creditors, payment.amount),
                Self::credit(&settlement, payment.amount),
            ],
        )
    }

    /// Posts a stock purchase: debit inventory, credit trade creditors when
    /// bought on credit, otherwise credit the bank.
    pub fn purchase_recorded(
        &self,
        date: NaiveDate,
        reference: &str,
        description: &str,
        amount: Decimal,
        on_credit: bool,
    ) -> Result<JournalEntry, LedgerError> {
        let inventory = self.role_account(AccountRole::Inventory);
        let funding = if on_credit {
            self.role_account(AccountRole::TradeCreditors)
        } else {
            self.role_account(AccountRole::DefaultBank)
        };

        self.post(
            date,
            reference.to_string(),
            None,
            description.to_string(),
            vec![
                Self::debit(&inventory, amount),
                Self::credit(&funding, amount),
            ],
        )
    }

    /// Posts a loan draw-down: debit the bank, credit loan payable.
    pub fn loan_drawn(
        &self,
        date: NaiveDate,
        reference: &str,
        amount: Decimal,
    ) -> Result<JournalEntry, LedgerError> {
        let bank = self.role_account(AccountRole::DefaultBank);
        let loan = self.role_account(AccountRole::LoanPayable);

        self.post(
            date,
            reference.to_string(),
            None,
            "Loan draw-down".to_string(),
            vec![Self::debit(&bank, amount), Self::credit(&loan, amount)],
        )
    }

    /// Posts a loan repayment, splitting one cash movement across two debit
    /// lines: principal against loan payable, interest against interest
    /// expense, credit cash/bank for the sum.
    pub fn loan_repaid(
        &self,
        date: NaiveDate,
        reference: &str,
        principal: Decimal,
        interest: Decimal,
    ) -> Result<JournalEntry, LedgerError> {
        let loan = self.role_account(AccountRole::LoanPayable);
        let bank = self.role_account(AccountRole::DefaultBank);

        let mut lines = vec![Self::debit(&loan, principal)];
        if interest > Decimal::ZERO {
            let interest_expense = self.role_account(AccountRole::InterestExpense);
            lines.push(Self::debit(&interest_expense, interest));
        }
        lines.push(Self::credit(&bank, principal + interest));

        self.post(
            date,
            reference.to_string(),
            None,
            "Loan repayment".to_string(),
            lines,
        )
    }

    /// Posts an owner's capital contribution: debit the bank, credit
    /// owner's capital.
    pub fn capital_contributed(
        &self,
        date: NaiveDate,
        reference: &str,
        amount: Decimal,
    ) -> Result<JournalEntry, LedgerError> {
        let bank = self.role_account(AccountRole::DefaultBank);
        let capital = self.role_account(AccountRole::OwnerCapital);

        self.post(
            date,
            reference.to_string(),
            None,
            "Capital contribution".to_string(),
            vec![Self::debit(&bank, amount), Self::credit(&capital, amount)],
        )
    }

    /// Posts an owner drawing: debit owner's drawings, credit the bank.
    pub fn owner_drawing(
        &self,
        date: NaiveDate,
        reference: &str,
        amount: Decimal,
    ) -> Result<JournalEntry, LedgerError> {
        let drawings = self.role_account(AccountRole::OwnerDrawings);
        let bank = self.role_account(AccountRole::DefaultBank);

        self.post(
            date,
            reference.to_string(),
            None,
            "Owner's drawing".to_string(),
            vec![Self::debit(&drawings, amount), Self::credit(&bank, amount)],
        )
    }

    /// Posts a direct supplier payment: debit trade creditors, credit
    /// cash/bank.
    pub fn supplier_paid(
        &self,
        date: NaiveDate,
        reference: &str,
        amount: Decimal,
        method: PaymentMethod,
    ) -> Result<JournalEntry, LedgerError> {
        let creditors = self.role_account(AccountRole::TradeCreditors);
        let settlement = self.settlement_account(method);

        self.post(
            date,
            reference.to_string(),
            None,
            "Supplier payment".to_string(),
            vec![
                Self::debit(&creditors, amount),
                Self::credit(&settlement, amount),
            ],
        )
    }

    /// Removes the journal entries produced by a source document. Called as
    /// a side effect of deleting the document itself.
    pub fn remove_for_document(&self, document_id: DocumentId) -> Result<usize, LedgerError> {
        Ok(self.store.delete_by_document(self.company_id, document_id)?)
    }

    /// Removes the journal entry stored under a reference. Migration aid
    /// for entries posted before source-document ids were recorded.
    pub fn remove_for_reference(&self, reference: &str) -> Result<usize, LedgerError> {
        Ok(self.store.delete_by_reference(self.company_id, reference)?)
    }
}
