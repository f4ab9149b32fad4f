/// Delimiter pair identifying the region of a file owned by openspec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub start: &'static str,
    pub end: &'static str,
}

pub const OPENSPEC_MARKERS: Markers = Markers {
    start: "<!-- OPENSPEC:START -->",
    end: "<!-- OPENSPEC:END -->",
};

impl Markers {
    /// Surround `body` with the start and end markers, each on its own line.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}\n{}\n{}", self.start, body, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_places_markers_on_own_lines() {
        let wrapped = OPENSPEC_MARKERS.wrap("body");
        assert_eq!(
            wrapped,
            "<!-- OPENSPEC:START -->\nbody\n<!-- OPENSPEC:END -->"
        );
    }
}
