use crate::record::Role;

/// Id of the injected checkbox column.
pub const SELECT_COLUMN_ID: &str = "select";

/// One column of a data table.
pub struct ColumnDef<M> {
    pub id: &'static str,
    pub header: String,
    pub accessor: fn(&M) -> String,
    pub enable_sorting: bool,
    pub enable_hiding: bool,
}

impl<M> ColumnDef<M> {
    pub fn new(id: &'static str, header: impl Into<String>, accessor: fn(&M) -> String) -> Self {
        Self {
            id,
            header: header.into(),
            accessor,
            enable_sorting: true,
            enable_hiding: true,
        }
    }

    pub fn sortable(mut self, enable: bool) -> Self {
        self.enable_sorting = enable;
        self
    }

    pub fn hideable(mut self, enable: bool) -> Self {
        self.enable_hiding = enable;
        self
    }

    pub fn cell(&self, row: &M) -> String {
        (self.accessor)(row)
    }
}

/// Columns of the roles table.
pub fn role_columns() -> Vec<ColumnDef<Role>> {
    vec![
        ColumnDef::new("name", "Name", |r: &Role| r.name.clone()).hideable(false),
        ColumnDef::new("description", "Description", |r: &Role| r.description.clone()),
    ]
}
