//! Fact table registry
//!
//! [`FactTables`] maps each [`TableKind`] to its ordered rows. Access is typed
//! through the sealed [`FactRow`] trait, so callers never match on table
//! identity themselves:
//!
//! ```
//! use calm_facts::{FactTables, ServiceEndpoint};
//!
//! let tables = FactTables::new().with_rows(vec![ServiceEndpoint::new(
//!     "com.example.GreetingController",
//!     "GET",
//!     "/greeting",
//!     "Spring",
//! )]);
//!
//! assert_eq!(tables.rows::<ServiceEndpoint>().len(), 1);
//! ```

use crate::kind::TableKind;
use crate::rows::{
    ClassDescription, DataAsset, DatabaseConnection, ExternalServiceCall, MessagingConnection,
    MethodCall, ProjectMetadata, SecurityConfiguration, ServerConfiguration, ServiceEndpoint,
};
use std::collections::BTreeMap;

/// Sealed trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}

/// Trait for row types stored in a [`FactTables`] registry
///
/// Each row type belongs to exactly one [`TableKind`].
pub trait FactRow: Clone + std::fmt::Debug + private::Sealed + 'static {
    /// Table this row type lives in
    const KIND: TableKind;

    /// Borrow rows of this type out of a table, if the table holds them
    fn from_table(table: &FactTable) -> Option<&[Self]>;

    /// Mutable access to the backing vector
    fn from_table_mut(table: &mut FactTable) -> Option<&mut Vec<Self>>;

    /// Wrap rows into a table
    fn into_table(rows: Vec<Self>) -> FactTable;
}

macro_rules! fact_tables {
    ($($variant:ident => $row:ty),+ $(,)?) => {
        /// Rows of a single fact table
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum FactTable {
            $(
                #[doc = concat!("Rows of [`", stringify!($row), "`]")]
                $variant(Vec<$row>),
            )+
        }

        impl FactTable {
            /// Table identity
            #[must_use]
            pub fn kind(&self) -> TableKind {
                match self {
                    $(FactTable::$variant(_) => TableKind::$variant,)+
                }
            }

            /// Number of rows
            #[must_use]
            pub fn len(&self) -> usize {
                match self {
                    $(FactTable::$variant(rows) => rows.len(),)+
                }
            }

            /// Whether the table has no rows
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Empty table of a kind
            #[must_use]
            pub fn empty(kind: TableKind) -> Self {
                match kind {
                    $(TableKind::$variant => FactTable::$variant(Vec::new()),)+
                }
            }

            /// Decode one JSON row and append it
            ///
            /// # Errors
            /// Returns the decode error; the table is left unchanged.
            pub fn push_json(&mut self, value: serde_json::Value) -> Result<(), serde_json::Error> {
                match self {
                    $(FactTable::$variant(rows) => rows.push(serde_json::from_value(value)?),)+
                }
                Ok(())
            }
        }

        $(
            impl private::Sealed for $row {}

            impl FactRow for $row {
                const KIND: TableKind = TableKind::$variant;

                fn from_table(table: &FactTable) -> Option<&[Self]> {
                    match table {
                        FactTable::$variant(rows) => Some(rows),
                        _ => None,
                    }
                }

                fn from_table_mut(table: &mut FactTable) -> Option<&mut Vec<Self>> {
                    match table {
                        FactTable::$variant(rows) => Some(rows),
                        _ => None,
                    }
                }

                fn into_table(rows: Vec<Self>) -> FactTable {
                    FactTable::$variant(rows)
                }
            }
        )+
    };
}

fact_tables! {
    ServiceEndpoints => ServiceEndpoint,
    DatabaseConnections => DatabaseConnection,
    ExternalServiceCalls => ExternalServiceCall,
    MessagingConnections => MessagingConnection,
    ServerConfiguration => ServerConfiguration,
    DataAssets => DataAsset,
    ProjectMetadata => ProjectMetadata,
    SecurityConfiguration => SecurityConfiguration,
    ClassDescriptions => ClassDescription,
    MethodCalls => MethodCall,
}

/// Snapshot of every fact table, keyed by [`TableKind`]
///
/// An absent table reads as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactTables {
    tables: BTreeMap<TableKind, FactTable>,
}

impl FactTables {
    /// Create empty snapshot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of type `R`, in insertion order
    #[must_use]
    pub fn rows<R: FactRow>(&self) -> &[R] {
        self.tables
            .get(&R::KIND)
            .and_then(R::from_table)
            .unwrap_or(&[])
    }

    /// First row of type `R`
    #[inline]
    #[must_use]
    pub fn first<R: FactRow>(&self) -> Option<&R> {
        self.rows::<R>().first()
    }

    /// Append one row
    pub fn insert<R: FactRow>(&mut self, row: R) {
        self.extend(std::iter::once(row));
    }

    /// Append rows, preserving their order
    pub fn extend<R: FactRow>(&mut self, rows: impl IntoIterator<Item = R>) {
        let table = self
            .tables
            .entry(R::KIND)
            .or_insert_with(|| R::into_table(Vec::new()));
        if let Some(existing) = R::from_table_mut(table) {
            existing.extend(rows);
        }
    }

    /// Builder-style [`extend`](Self::extend)
    #[must_use]
    pub fn with_rows<R: FactRow>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.extend(rows);
        self
    }

    /// Raw table access for kind-driven callers
    pub(crate) fn table_mut(&mut self, kind: TableKind) -> &mut FactTable {
        self.tables
            .entry(kind)
            .or_insert_with(|| FactTable::empty(kind))
    }

    /// Row count of a table
    #[must_use]
    pub fn len_of(&self, kind: TableKind) -> usize {
        self.tables.get(&kind).map_or(0, FactTable::len)
    }

    /// Total rows across all tables
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.tables.values().map(FactTable::len).sum()
    }

    /// Whether every table is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows() == 0
    }

    /// Whether any table that can justify a document has rows
    #[must_use]
    pub fn has_architectural_facts(&self) -> bool {
        TableKind::ALL
            .iter()
            .filter(|kind| kind.is_architectural())
            .any(|kind| self.len_of(*kind) > 0)
    }

    /// Non-empty tables with their row counts
    pub fn counts(&self) -> impl Iterator<Item = (TableKind, usize)> + '_ {
        self.tables
            .iter()
            .filter(|(_, table)| !table.is_empty())
            .map(|(kind, table)| (*kind, table.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_table_reads_empty() {
        let tables = FactTables::new();
        assert!(tables.rows::<ServiceEndpoint>().is_empty());
        assert!(tables.first::<ProjectMetadata>().is_none());
        assert_eq!(tables.len_of(TableKind::DataAssets), 0);
        assert!(tables.is_empty());
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut tables = FactTables::new();
        tables.insert(DataAsset::new("Order", "Entity"));
        tables.insert(DataAsset::new("Invoice", "Entity"));
        tables.extend(vec![DataAsset::new("Customer", "Record")]);

        let names: Vec<_> = tables
            .rows::<DataAsset>()
            .iter()
            .map(|a| a.simple_name.as_str())
            .collect();
        assert_eq!(names, vec!["Order", "Invoice", "Customer"]);
        assert_eq!(tables.total_rows(), 3);
    }

    #[test]
    fn tables_are_isolated_by_kind() {
        let tables = FactTables::new()
            .with_rows(vec![ProjectMetadata::new("shop")])
            .with_rows(vec![SecurityConfiguration::cors(None)]);

        assert_eq!(tables.rows::<ProjectMetadata>().len(), 1);
        assert_eq!(tables.rows::<SecurityConfiguration>().len(), 1);
        assert!(tables.rows::<ServiceEndpoint>().is_empty());
        assert!(!tables.has_architectural_facts());
    }

    #[test]
    fn architectural_facts_detected() {
        let tables =
            FactTables::new().with_rows(vec![MessagingConnection::new("a.B", "q", "producer", "JMS")]);
        assert!(tables.has_architectural_facts());
    }

    #[test]
    fn push_json_appends_typed_row() {
        let mut table = FactTable::empty(TableKind::DataAssets);
        table
            .push_json(serde_json::json!({ "simple_name": "Order", "asset_type": "Entity" }))
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.kind(), TableKind::DataAssets);

        let bad = table.push_json(serde_json::json!({ "simple_name": "Order" }));
        assert!(bad.is_err());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn counts_skip_empty_tables() {
        let mut tables = FactTables::new();
        tables.extend(Vec::<DataAsset>::new());
        tables.insert(ProjectMetadata::new("shop"));

        let counts: Vec<_> = tables.counts().collect();
        assert_eq!(counts, vec![(TableKind::ProjectMetadata, 1)]);
    }
}
