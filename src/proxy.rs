//! Side-aware axis group access.
//!
//! A figure can carry any number of axes per family (bottom+top form the x
//! family, left+right the y family). [`AxisProxy`] is the single handle
//! callers use to talk to a whole family at once: writes broadcast to every
//! member, reads are only answered when the family has exactly one member,
//! and the members can always be enumerated in attachment order.
//!
//! A proxy is a transient view. It borrows the figure mutably, so it cannot
//! outlive a structural change to the axis collection; every access through
//! `Figure::xaxis()` / `Figure::yaxis()` re-derives the group from live
//! state, and axes attached between two accesses show up on the next one.

use crate::axis::{Axis, AxisFamily};
use crate::error::{PlotError, PlotResult};

/// A transient, side-aware handle over one axis family of a figure.
pub struct AxisProxy<'a> {
    family: AxisFamily,
    members: Vec<&'a mut Axis>,
}

impl<'a> AxisProxy<'a> {
    pub(crate) fn new(family: AxisFamily, members: Vec<&'a mut Axis>) -> Self {
        AxisProxy { family, members }
    }

    /// Family this proxy is bound to.
    pub fn family(&self) -> AxisFamily {
        self.family
    }

    /// Number of axes currently in the family.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the family has no member axes.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Visit every member axis in attachment order.
    ///
    /// A no-op for an empty family.
    pub fn each(&mut self, mut visitor: impl FnMut(&mut Axis)) {
        for axis in self.members.iter_mut() {
            visitor(axis);
        }
    }

    /// Iterate over the member axes in attachment order.
    ///
    /// Enumeration is always allowed, whatever the family size; only the
    /// singular [`get`](Self::get) path is restricted.
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.members.iter().map(|axis| &**axis)
    }

    /// Broadcast one value to every member axis through a setter.
    ///
    /// The value is applied to each member in attachment order. Legal for
    /// any family size; broadcasting into an empty family does nothing.
    pub fn set<V: Clone>(&mut self, value: V, mut setter: impl FnMut(&mut Axis, V)) {
        for axis in self.members.iter_mut() {
            setter(axis, value.clone());
        }
    }

    /// Read a property through a getter.
    ///
    /// Only well-defined when the family has exactly one member; for zero
    /// or several members the request is underspecified and the read fails
    /// with [`PlotError::AmbiguousAxisAccess`]. Answering with the first
    /// member's value instead would hide configuration mistakes.
    pub fn get<V>(&self, getter: impl FnOnce(&Axis) -> V) -> PlotResult<V> {
        match self.members.as_slice() {
            [axis] => Ok(getter(&**axis)),
            _ => Err(PlotError::AmbiguousAxisAccess {
                family: self.family,
                count: self.members.len(),
            }),
        }
    }

    /// Label of the family's single axis.
    pub fn label(&self) -> PlotResult<Option<String>> {
        self.get(|axis| axis.label.clone())
    }

    /// Set the label on every member axis.
    pub fn set_label(&mut self, label: impl Into<String>) {
        let label = label.into();
        self.set(label, |axis, value| axis.label = Some(value));
    }

    /// Remove the label from every member axis.
    pub fn clear_label(&mut self) {
        self.each(|axis| axis.label = None);
    }

    /// Visibility of the family's single axis.
    pub fn visible(&self) -> PlotResult<bool> {
        self.get(|axis| axis.visible)
    }

    /// Show or hide every member axis.
    pub fn set_visible(&mut self, visible: bool) {
        self.set(visible, |axis, value| axis.visible = value);
    }

    /// Labels of all member axes, in attachment order.
    pub fn labels(&self) -> Vec<Option<String>> {
        self.iter().map(|axis| axis.label.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisPosition};
    use crate::figure::Figure;

    #[test]
    fn test_empty_family() {
        let mut fig = Figure::new();

        // Writes and visits are no-ops.
        fig.xaxis().set_label("time (s)");
        let mut visited = 0;
        fig.xaxis().each(|_| visited += 1);
        assert_eq!(visited, 0);
        assert!(fig.xaxis().is_empty());

        // A singular read fails.
        assert!(matches!(
            fig.xaxis().label(),
            Err(PlotError::AmbiguousAxisAccess {
                family: AxisFamily::X,
                count: 0,
            })
        ));
    }

    #[test]
    fn test_single_member_read_write() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("time (s)"), AxisPosition::Bottom);

        assert_eq!(fig.xaxis().label().unwrap().as_deref(), Some("time (s)"));

        fig.xaxis().set_label("elapsed (s)");
        assert_eq!(fig.xaxis().label().unwrap().as_deref(), Some("elapsed (s)"));

        fig.xaxis().set_visible(false);
        assert!(!fig.xaxis().visible().unwrap());
    }

    #[test]
    fn test_multi_member_read_fails_write_broadcasts() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new(), AxisPosition::Left);
        fig.attach_axis(Axis::new(), AxisPosition::Right);
        fig.attach_axis(Axis::new(), AxisPosition::Left);

        assert!(matches!(
            fig.yaxis().label(),
            Err(PlotError::AmbiguousAxisAccess {
                family: AxisFamily::Y,
                count: 3,
            })
        ));

        fig.yaxis().set_label("value");
        let labels = fig.yaxis().labels();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| l.as_deref() == Some("value")));
    }

    #[test]
    fn test_iteration_matches_attachment_order() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("b0"), AxisPosition::Bottom);
        fig.attach_axis(Axis::new().label("t0"), AxisPosition::Top);
        fig.attach_axis(Axis::new().label("b1"), AxisPosition::Bottom);

        let labels: Vec<String> = fig
            .xaxis()
            .iter()
            .map(|axis| axis.label.clone().unwrap())
            .collect();
        assert_eq!(labels, vec!["b0", "t0", "b1"]);
    }

    #[test]
    fn test_families_are_independent() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("x"), AxisPosition::Bottom);
        fig.attach_axis(Axis::new().label("y"), AxisPosition::Left);

        fig.xaxis().set_label("only x");
        assert_eq!(fig.yaxis().label().unwrap().as_deref(), Some("y"));
        assert_eq!(fig.xaxis().label().unwrap().as_deref(), Some("only x"));
    }

    #[test]
    fn test_growth_scenario() {
        // One axis first: singular access works.
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("X0"), AxisPosition::Bottom);
        assert_eq!(fig.xaxis().label().unwrap().as_deref(), Some("X0"));

        // Two more make the family ambiguous; broadcast still works.
        fig.attach_axis(Axis::new(), AxisPosition::Top);
        fig.attach_axis(Axis::new(), AxisPosition::Bottom);
        fig.xaxis().set_label("X1");

        assert!(fig.xaxis().label().is_err());
        assert_eq!(fig.xaxis().len(), 3);
        let labels = fig.xaxis().labels();
        assert_eq!(
            labels,
            vec![
                Some("X1".to_string()),
                Some("X1".to_string()),
                Some("X1".to_string()),
            ]
        );
    }

    #[test]
    fn test_materialized_sequences_are_snapshots() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().label("first"), AxisPosition::Bottom);

        let before = fig.xaxis().labels();
        fig.attach_axis(Axis::new().label("second"), AxisPosition::Top);

        // The already-collected sequence is unchanged; a fresh access sees
        // the new member.
        assert_eq!(before, vec![Some("first".to_string())]);
        assert_eq!(fig.xaxis().labels().len(), 2);
    }

    #[test]
    fn test_each_visits_in_order_with_mutation() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new(), AxisPosition::Left);
        fig.attach_axis(Axis::new(), AxisPosition::Right);

        let mut n = 0;
        fig.yaxis().each(|axis| {
            axis.label = Some(format!("y{}", n));
            n += 1;
        });
        assert_eq!(
            fig.yaxis().labels(),
            vec![Some("y0".to_string()), Some("y1".to_string())]
        );
    }

    #[test]
    fn test_generic_capabilities() {
        let mut fig = Figure::new();
        fig.attach_axis(Axis::new().num_ticks(4), AxisPosition::Bottom);

        assert_eq!(fig.xaxis().get(|axis| axis.num_ticks).unwrap(), 4);
        fig.xaxis().set(9, |axis, n| axis.num_ticks = n);
        assert_eq!(fig.xaxis().get(|axis| axis.num_ticks).unwrap(), 9);
    }
}
