//! List query state and the filter, sort, paginate pipeline.
//!
//! `ListController` owns the dataset and the query state. Every mutation
//! recomputes the display subset synchronously through [`filter_and_sort`].

use crate::college::{CollegeRecord, Placement};
use std::cmp::{self, Ordering};

/// Default number of rows revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Column the listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// CD rank
    Rank,
    /// College name
    CollegeName,
    /// Course fees
    Fees,
    /// Placement packages
    Placement,
    /// User rating
    UserRating,
    /// External ranking label
    Ranking,
}

impl SortColumn {
    /// Columns in header order.
    pub const ALL: [SortColumn; 6] = [
        SortColumn::Rank,
        SortColumn::CollegeName,
        SortColumn::Fees,
        SortColumn::Placement,
        SortColumn::UserRating,
        SortColumn::Ranking,
    ];

    /// Header label shown in the table.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Rank => "CD Rank",
            SortColumn::CollegeName => "Colleges",
            SortColumn::Fees => "Course Fees",
            SortColumn::Placement => "Placement",
            SortColumn::UserRating => "User Reviews",
            SortColumn::Ranking => "Ranking",
        }
    }

    /// Column at a header position.
    ///
    /// # Arguments
    /// * `index` - Zero-based header index
    ///
    /// # Returns
    /// * `Option<SortColumn>` - Column or None if out of range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Compare two records by this column's value, ascending.
    pub fn compare(self, a: &CollegeRecord, b: &CollegeRecord) -> Ordering {
        match self {
            SortColumn::Rank => a.rank.cmp(&b.rank),
            SortColumn::CollegeName => a.college_name.cmp(&b.college_name),
            SortColumn::Fees => a.fees.total_cmp(&b.fees),
            SortColumn::Placement => compare_placement(&a.placement, &b.placement),
            SortColumn::UserRating => a
                .user_rating
                .partial_cmp(&b.user_rating)
                .unwrap_or(Ordering::Equal),
            SortColumn::Ranking => a.ranking.cmp(&b.ranking),
        }
    }
}

/// Placement orders by average package, then highest; a missing package
/// sorts before any present one.
fn compare_placement(a: &Placement, b: &Placement) -> Ordering {
    compare_package(a.average, b.average).then_with(|| compare_package(a.highest, b.highest))
}

fn compare_package(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// No column has been selected yet
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

/// Search, sort, and pagination state of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against college names
    pub search_term: String,
    /// Active sort column, if any
    pub sort_column: Option<SortColumn>,
    /// Direction of the active sort
    pub sort_direction: SortDirection,
    /// Number of rows revealed so far; never shrinks
    pub visible_count: usize,
}

impl ListQuery {
    /// Create a query showing the first page in dataset order.
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Unsorted,
            visible_count: page_size,
        }
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// Whether a record passes the search filter.
///
/// # Arguments
/// * `record` - Record to test
/// * `term_lower` - Already lower-cased search term
pub fn matches(record: &CollegeRecord, term_lower: &str) -> bool {
    term_lower.is_empty() || record.college_name.to_lowercase().contains(term_lower)
}

/// Indices of all records passing the search filter, sorted by the query.
///
/// # Arguments
/// * `records` - Full dataset
/// * `query` - Current query state
///
/// # Returns
/// * `Vec<usize>` - Indices into `records`, before pagination
pub fn filter_and_sort(records: &[CollegeRecord], query: &ListQuery) -> Vec<usize> {
    let term_lower = query.search_term.to_lowercase();
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &term_lower))
        .map(|(idx, _)| idx)
        .collect();

    if let Some(column) = query.sort_column {
        match query.sort_direction {
            SortDirection::Ascending => {
                indices.sort_by(|&a, &b| column.compare(&records[a], &records[b]));
            }
            SortDirection::Descending => {
                indices.sort_by(|&a, &b| column.compare(&records[b], &records[a]));
            }
            SortDirection::Unsorted => {}
        }
    }

    indices
}

/// Owner of the dataset and query state.
///
/// Keeps the filtered and sorted order cached so growing the page only
/// re-slices, while search and sort changes re-run the full pipeline.
#[derive(Debug)]
pub struct ListController {
    records: Vec<CollegeRecord>,
    query: ListQuery,
    page_size: usize,
    /// Filtered and sorted indices into `records`
    ordered: Vec<usize>,
    /// Bumped whenever the display subset may have changed
    generation: u64,
}

impl ListController {
    /// Create a controller over a dataset.
    ///
    /// # Arguments
    /// * `records` - Full dataset, in source order
    /// * `page_size` - Rows revealed initially and per `grow_page`
    pub fn new(records: Vec<CollegeRecord>, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let query = ListQuery::new(page_size);
        let ordered = filter_and_sort(&records, &query);
        Self {
            records,
            query,
            page_size,
            ordered,
            generation: 0,
        }
    }

    /// Current query state.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Full dataset.
    pub fn records(&self) -> &[CollegeRecord] {
        &self.records
    }

    /// Counter that changes with every search, sort, or page change.
    ///
    /// Two equal generations imply the same display subset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of records passing the search filter.
    pub fn filtered_count(&self) -> usize {
        self.ordered.len()
    }

    /// Number of rows currently displayed.
    pub fn display_len(&self) -> usize {
        cmp::min(self.query.visible_count, self.ordered.len())
    }

    /// The display subset in order.
    pub fn display(&self) -> Vec<&CollegeRecord> {
        self.ordered
            .iter()
            .take(self.query.visible_count)
            .map(|&idx| &self.records[idx])
            .collect()
    }

    /// Record at a display position.
    pub fn display_get(&self, position: usize) -> Option<&CollegeRecord> {
        if position >= self.display_len() {
            return None;
        }
        self.ordered.get(position).map(|&idx| &self.records[idx])
    }

    /// Update the search term and recompute the filtered set.
    ///
    /// # Details
    /// `visible_count` is left untouched.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.refresh();
    }

    /// Append a character to the search term.
    pub fn push_search_char(&mut self, ch: char) {
        self.query.search_term.push(ch);
        self.refresh();
    }

    /// Remove the last character of the search term.
    pub fn pop_search_char(&mut self) {
        if self.query.search_term.pop().is_some() {
            self.refresh();
        }
    }

    /// Sort by a column.
    ///
    /// # Details
    /// Selecting the active column flips its direction. Selecting any other
    /// column makes it active in ascending order.
    pub fn set_sort(&mut self, column: SortColumn) {
        if self.query.sort_column == Some(column) {
            self.query.sort_direction = match self.query.sort_direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending | SortDirection::Unsorted => SortDirection::Ascending,
            };
        } else {
            self.query.sort_column = Some(column);
            self.query.sort_direction = SortDirection::Ascending;
        }
        self.refresh();
    }

    /// Reveal the next page of rows.
    ///
    /// # Returns
    /// * `bool` - Whether the visible count changed
    ///
    /// # Details
    /// Growth is capped at the filtered count, and the visible count never
    /// shrinks. Once every filtered record is shown this is a no-op.
    pub fn grow_page(&mut self) -> bool {
        let current = self.query.visible_count;
        let ceiling = cmp::max(current, self.ordered.len());
        let next = cmp::min(current.saturating_add(self.page_size), ceiling);
        self.query.visible_count = next;
        if next == current {
            return false;
        }
        self.generation += 1;
        true
    }

    fn refresh(&mut self) {
        self.ordered = filter_and_sort(&self.records, &self.query);
        self.generation += 1;
    }
}
