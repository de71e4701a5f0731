use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A rendered unit inside a region: a paragraph, a subtitle, or a generic
/// element of some tag holding text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Fragment {
    Paragraph(String),
    Subtitle(String),
    Element { tag: String, text: String },
}

/// In-memory model of the display surface: named regions, each an ordered
/// list of fragments. Regions are fixed at construction.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Surface {
    regions: BTreeMap<String, Vec<Fragment>>,
}

impl Surface {
    pub fn with_regions(names: &[&str]) -> Self {
        let regions = names
            .iter()
            .map(|n| ((*n).to_owned(), Vec::new()))
            .collect();
        Self { regions }
    }

    pub fn region(&self, name: &str) -> Option<&[Fragment]> {
        self.regions.get(name).map(Vec::as_slice)
    }

    fn region_mut(&mut self, name: &str) -> Option<&mut Vec<Fragment>> {
        self.regions.get_mut(name)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, fragments) in &self.regions {
            if fragments.is_empty() {
                continue;
            }
            writeln!(f, "[{name}]")?;
            for fragment in fragments {
                match fragment {
                    Fragment::Paragraph(text) => writeln!(f, "  {text}")?,
                    Fragment::Subtitle(text) => writeln!(f, "  == {text} ==")?,
                    Fragment::Element { tag, text } => writeln!(f, "  <{tag}> {text}")?,
                }
            }
        }
        Ok(())
    }
}

/// Inserts and removes fragments in named regions of a [`Surface`].
///
/// Every operation is a pure side effect on the targeted region and returns
/// nothing; an unknown region name is a silent no-op. These primitives are the
/// only way the workflow controller touches the display surface.
#[derive(Clone, Debug, Default)]
pub struct ContentRenderer {
    surface: Surface,
}

impl ContentRenderer {
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn append_paragraph(&mut self, region: &str, text: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.push(Fragment::Paragraph(text.to_owned()));
        }
    }

    pub fn prepend_paragraph(&mut self, region: &str, text: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.insert(0, Fragment::Paragraph(text.to_owned()));
        }
    }

    pub fn append_subtitle(&mut self, region: &str, text: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.push(Fragment::Subtitle(text.to_owned()));
        }
    }

    pub fn prepend_subtitle(&mut self, region: &str, text: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.insert(0, Fragment::Subtitle(text.to_owned()));
        }
    }

    /// Appends an empty element of the given tag to the region.
    pub fn create_element(&mut self, region: &str, tag: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.push(Fragment::Element {
                tag: tag.to_owned(),
                text: String::new(),
            });
        }
    }

    /// Sets the text of the most recently created element in the region,
    /// and only that element. Fragments of other kinds are left untouched.
    pub fn fill_last_element(&mut self, region: &str, text: &str) {
        let Some(fragments) = self.surface.region_mut(region) else {
            return;
        };
        for fragment in fragments.iter_mut().rev() {
            if let Fragment::Element { text: slot, .. } = fragment {
                *slot = text.to_owned();
                return;
            }
        }
    }

    /// Removes all fragments of the region.
    pub fn clear(&mut self, region: &str) {
        if let Some(fragments) = self.surface.region_mut(region) {
            fragments.clear();
        }
    }
}
