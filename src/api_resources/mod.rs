//! Legacy import paths
//!
//! Earlier releases exposed resources under `centra::api_resources`. The
//! aliases here keep those imports compiling; each use warns and points at
//! the current path under [`crate::resources`].

/// Legacy path for [`crate::resources::Card`]
pub mod card {
    /// Moved to [`crate::resources::Card`]
    #[deprecated(since = "0.2.0", note = "import `centra::resources::Card` instead")]
    pub type Card = crate::resources::Card;
}

/// Legacy path for [`crate::resources::Charge`]
pub mod charge {
    /// Moved to [`crate::resources::Charge`]
    #[deprecated(since = "0.2.0", note = "import `centra::resources::Charge` instead")]
    pub type Charge = crate::resources::Charge;
}

/// Legacy path for [`crate::resources::Customer`]
pub mod customer {
    /// Moved to [`crate::resources::Customer`]
    #[deprecated(since = "0.2.0", note = "import `centra::resources::Customer` instead")]
    pub type Customer = crate::resources::Customer;
}

/// Legacy path for [`crate::resources::InvoicePayment`]
pub mod invoice_payment {
    /// Moved to [`crate::resources::InvoicePayment`]
    #[deprecated(
        since = "0.2.0",
        note = "import `centra::resources::InvoicePayment` instead"
    )]
    pub type InvoicePayment = crate::resources::InvoicePayment;
}

/// Legacy paths for [`crate::resources::capital`]
pub mod capital {
    /// Legacy path for [`crate::resources::capital::FinancingOffer`]
    pub mod financing_offer {
        /// Moved to [`crate::resources::capital::FinancingOffer`]
        #[deprecated(
            since = "0.2.0",
            note = "import `centra::resources::capital::FinancingOffer` instead"
        )]
        pub type FinancingOffer = crate::resources::capital::FinancingOffer;
    }
}

/// Legacy paths for [`crate::resources::financial_connections`]
pub mod financial_connections {
    /// Legacy path for [`crate::resources::financial_connections::Account`]
    pub mod account {
        /// Moved to [`crate::resources::financial_connections::Account`]
        #[deprecated(
            since = "0.2.0",
            note = "import `centra::resources::financial_connections::Account` instead"
        )]
        pub type Account = crate::resources::financial_connections::Account;
    }

    /// Legacy path for
    /// [`crate::resources::financial_connections::AccountInferredBalance`]
    pub mod account_inferred_balance {
        /// Moved to
        /// [`crate::resources::financial_connections::AccountInferredBalance`]
        #[deprecated(
            since = "0.2.0",
            note = "import `centra::resources::financial_connections::AccountInferredBalance` instead"
        )]
        pub type AccountInferredBalance =
            crate::resources::financial_connections::AccountInferredBalance;
    }
}

#[allow(deprecated)]
#[cfg(test)]
mod tests {
    #[test]
    fn test_aliases_resolve_to_current_types() {
        fn same_card(card: super::card::Card) -> crate::resources::Card {
            card
        }
        fn same_customer(c: super::customer::Customer) -> crate::resources::Customer {
            c
        }
        // Type identity is checked at compile time; nothing to run.
        let _ = same_card;
        let _ = same_customer;
    }
}
