use crate::database::table::TypedTable;
use crate::database::table::Value;
use std::cmp::Ordering;

/// Direction of a view sort.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Read-only projection over a table. Holds nothing but the row order, so it
/// is rebuilt whenever it is asked for.
#[derive(Clone, Debug)]
pub struct View<'a> {
    table: &'a TypedTable,
    /// Indices into the table rows, in view order
    order: Vec<usize>,
}

impl<'a> View<'a> {
    pub(crate) fn new(table: &'a TypedTable) -> Self {
        Self {
            table,
            order: (0..table.rows.len()).collect(),
        }
    }

    pub fn table(&self) -> &'a TypedTable {
        self.table
    }

    /// Stable sort on the values of one column. Rows without a value at
    /// `column` keep their relative order at the end.
    pub fn sort_by(mut self, column: usize, order: SortOrder) -> Self {
        let table = self.table;
        let rows = &table.rows;
        self.order.sort_by(|left, right| {
            match (rows[*left].get(column), rows[*right].get(column)) {
                (Some(left), Some(right)) => {
                    let ordering = compare(left, right);
                    match order {
                        SortOrder::Ascending => ordering,
                        SortOrder::Descending => ordering.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
        self
    }

    /// Keeps the rows for which `predicate` holds.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool,
    {
        let table = self.table;
        let rows = &table.rows;
        self.order.retain(|index| predicate(&rows[*index]));
        self
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [Value]> + '_ {
        let table: &'a TypedTable = self.table;
        let rows = &table.rows;
        self.order.iter().map(move |index| rows[*index].as_slice())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Rank of a value kind: empty, boolean, number, then strings.
fn rank(value: &Value) -> u8 {
    match value {
        Value::Empty => 0,
        Value::Boolean(_) => 1,
        Value::Number(_) => 2,
        Value::Text(_) | Value::Rendered(_) => 3,
    }
}

fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Boolean(left), Value::Boolean(right)) => left.cmp(right),
        (Value::Number(left), Value::Number(right)) => left.total_cmp(right),
        (Value::Text(left) | Value::Rendered(left), Value::Text(right) | Value::Rendered(right)) => {
            left.cmp(right)
        }
        _ => rank(left).cmp(&rank(right)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::column::Column;
    use crate::database::column::ColumnType;
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> Value {
        Value::Text(value.to_owned())
    }

    fn table() -> TypedTable {
        TypedTable {
            name: String::new(),
            description: String::new(),
            columns: vec![
                Column::new("N", ColumnType::Text),
                Column::new("V", ColumnType::Number),
            ],
            rows: vec![
                vec![text("a"), Value::Number(3.5)],
                vec![text("b"), text("oops")],
                vec![text("c"), Value::Number(-1.0)],
                vec![text("d"), Value::Empty],
                vec![text("e"), Value::Number(3.5)],
            ],
        }
    }

    fn names(view: &View<'_>) -> Vec<String> {
        view.rows().map(|row| row[0].to_string()).collect()
    }

    #[test]
    fn view_default_order() {
        let table = table();
        let view = table.view();
        assert_eq!(view.len(), 5);
        assert_eq!(names(&view), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn view_sort_mixed_kinds() {
        let table = table();
        let view = table.view().sort_by(1, SortOrder::Ascending);
        assert_eq!(names(&view), vec!["d", "c", "a", "e", "b"]);

        let view = table.view().sort_by(1, SortOrder::Descending);
        assert_eq!(names(&view), vec!["b", "a", "e", "c", "d"]);
    }

    #[test]
    fn view_filter() {
        let table = table();
        let view = table.view().filter(|row| matches!(row[1], Value::Number(value) if value > 0.0));
        assert_eq!(names(&view), vec!["a", "e"]);

        let view = table.view().filter(|_| false);
        assert!(view.is_empty());
        assert_eq!(table.rows().len(), 5);
    }
}
