use crate::database::converter::ConversionError;
use crate::database::converter::GridTableConverter;
use crate::database::table::TypedTable;
use crate::database::view::View;
use crate::spreadsheet::grid::Grid;
use std::sync::Arc;

/// Parts of a [`SheetTable`] that a bound view may need to refresh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Property {
    Name,
    Description,
    Data,
    Table,
    View,
}

/// Handle returned by [`SheetTable::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(Property)>;

/// A grid together with the typed table converted from it. The table is only
/// ever replaced whole; every replacement is announced to subscribers.
pub struct SheetTable {
    /// Table name
    name: String,
    /// Free-form description
    description: String,
    /// Source grid
    data: Grid,
    /// Current conversion result
    table: Arc<TypedTable>,
    converter: GridTableConverter,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: usize,
}

impl SheetTable {
    /// Creates a holder with an empty table. Missing metadata becomes empty strings.
    pub fn new(data: Grid, name: Option<&str>, description: Option<&str>) -> Self {
        let name = name.unwrap_or_default().to_owned();
        let description = description.unwrap_or_default().to_owned();
        Self {
            table: Arc::new(TypedTable::new(&name, &description)),
            name,
            description,
            data,
            converter: GridTableConverter::default(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn with_converter(mut self, converter: GridTableConverter) -> Self {
        self.converter = converter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn data(&self) -> &Grid {
        &self.data
    }

    /// Current table snapshot; stays valid across later replacements.
    pub fn table(&self) -> Arc<TypedTable> {
        Arc::clone(&self.table)
    }

    /// Fresh projection over the current table.
    pub fn view(&self) -> View<'_> {
        self.table.view()
    }

    pub fn set_name(&mut self, name: &str) {
        if self.name != name {
            self.name = name.to_owned();
            self.notify(Property::Name);
        }
    }

    pub fn set_description(&mut self, description: &str) {
        if self.description != description {
            self.description = description.to_owned();
            self.notify(Property::Description);
        }
    }

    pub fn set_data(&mut self, data: Grid) {
        if self.data != data {
            self.data = data;
            self.notify(Property::Data);
        }
    }

    /// Converts the current grid and replaces the table with the result.
    ///
    /// Failures are logged and whatever was built before them is kept, so an
    /// undersized grid leaves an empty table behind. The error is still
    /// returned for callers that want to tell an empty sheet from a failed parse.
    pub fn parse(&mut self) -> Result<(), ConversionError> {
        let mut table = TypedTable::new(&self.name, &self.description);
        let mut warnings = Vec::new();
        let result = self.converter.populate(&self.data, &mut table, &mut warnings);
        self.replace_table(table);
        result
    }

    /// Swaps in a new table and announces both the table and its view.
    pub fn replace_table(&mut self, table: TypedTable) {
        self.table = Arc::new(table);
        self.notify(Property::Table);
        self.notify(Property::View);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Property) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != count
    }

    fn notify(&mut self, property: Property) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(property);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::table::Value;
    use crate::spreadsheet::cell::Cell;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn grid() -> Grid {
        Grid::from(vec![
            vec![Cell::from("Name"), Cell::from("Score")],
            vec![Cell::from("Ann"), Cell::Number(7.0)],
            vec![Cell::from("Ben"), Cell::Number(9.0)],
        ])
    }

    fn record(sheet: &mut SheetTable) -> Rc<RefCell<Vec<Property>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        sheet.subscribe(move |property| sink.borrow_mut().push(property));
        events
    }

    #[test]
    fn sheet_table_initial() {
        let sheet = SheetTable::new(grid(), None, Some("scores"));
        assert_eq!(sheet.name(), "");
        assert_eq!(sheet.description(), "scores");
        assert!(sheet.table().is_empty());
        assert!(sheet.view().is_empty());
    }

    #[test]
    fn sheet_table_parse_notifies() {
        let mut sheet = SheetTable::new(grid(), Some("test"), None);
        let events = record(&mut sheet);
        let before = sheet.table();

        assert_eq!(sheet.parse(), Ok(()));
        assert_eq!(*events.borrow(), vec![Property::Table, Property::View]);
        assert!(before.is_empty());

        let table = sheet.table();
        assert_eq!(table.name(), "test");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(sheet.view().len(), 2);
        assert_eq!(table.value(1, 1), Some(&Value::Number(9.0)));
    }

    #[test]
    fn sheet_table_parse_undersized_grid() {
        let mut sheet = SheetTable::new(Grid::from(vec![vec![Cell::from("X")]]), None, None);
        let events = record(&mut sheet);

        assert_eq!(sheet.parse(), Err(ConversionError::MissingHeaderOrDataRow { rows: 1 }));
        assert!(sheet.table().is_empty());
        assert_eq!(*events.borrow(), vec![Property::Table, Property::View]);
    }

    #[test]
    fn sheet_table_setters_notify_on_change_only() {
        let mut sheet = SheetTable::new(grid(), Some("a"), None);
        let events = record(&mut sheet);

        sheet.set_name("a");
        sheet.set_name("b");
        sheet.set_description("");
        sheet.set_description("d");
        sheet.set_data(grid());
        sheet.set_data(Grid::default());

        assert_eq!(*events.borrow(), vec![Property::Name, Property::Description, Property::Data]);
        assert_eq!(sheet.name(), "b");
        assert_eq!(sheet.data().row_count(), 0);
    }

    #[test]
    fn sheet_table_unsubscribe() {
        let mut sheet = SheetTable::new(grid(), None, None);
        let events = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&events);
        let id = sheet.subscribe(move |_| *sink.borrow_mut() += 1);

        sheet.replace_table(TypedTable::default());
        assert!(sheet.unsubscribe(id));
        assert!(!sheet.unsubscribe(id));
        sheet.replace_table(TypedTable::default());
        assert_eq!(*events.borrow(), 2);
    }
}
