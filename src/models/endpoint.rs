use chrono::NaiveDate;

/// Which side of an employment interval an endpoint marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Start,
    End,
}

impl EndpointKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Start => "start",
            EndpointKind::End => "end",
        }
    }

    /// Change applied to the concurrency counter when the sweep crosses it.
    pub fn delta(&self) -> i32 {
        match self {
            EndpointKind::Start => 1,
            EndpointKind::End => -1,
        }
    }
}

/// One side of an employment interval, placed on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub kind: EndpointKind,
    pub instant: NaiveDate,
    /// Position of the originating record in the employment history.
    pub source_index: usize,
    /// True for an end that was not recorded (or was "present") and so
    /// stands at the analysis instant.
    pub open: bool,
}

impl Endpoint {
    pub fn start(instant: NaiveDate, source_index: usize) -> Self {
        Self {
            kind: EndpointKind::Start,
            instant,
            source_index,
            open: false,
        }
    }

    pub fn end(instant: NaiveDate, source_index: usize, open: bool) -> Self {
        Self {
            kind: EndpointKind::End,
            instant,
            source_index,
            open,
        }
    }
}
