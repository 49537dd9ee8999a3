//! Scene store: the single owner of all tubes and the selection.
//!
//! Every mutating operation finishes by recomputing the joint highlight flags
//! of the whole collection before returning, so any reader that runs after a
//! mutation observes consistent derived state. The check is a brute-force
//! pairwise AABB test, which is fine for the tens of tubes a scene holds.

use glam::Vec3;

use crate::geometry::display_rotation;
use crate::types::{Tube, TubeId, TubePatch, TubeTemplate};

/// Offset applied per existing tube when a new one is added
pub const DEFAULT_ADD_OFFSET: Vec3 = Vec3::new(2.0, 0.0, 0.0);

/// Everything the renderer needs to draw one tube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub id: TubeId,
    pub position: Vec3,
    /// Snapped rotation in radians
    pub rotation: Vec3,
    /// Box dimensions (width, height, length)
    pub size: Vec3,
    pub selected: bool,
    pub joint_highlighted: bool,
    pub wireframe: bool,
}

/// Authoritative collection of tubes
#[derive(Debug, Clone)]
pub struct SceneStore {
    tubes: Vec<Tube>,
    selected: Option<TubeId>,
    next_id: u32,
    add_offset: Vec3,
    revision: u64,
}

impl SceneStore {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            tubes: Vec::new(),
            selected: None,
            next_id: 1,
            add_offset: DEFAULT_ADD_OFFSET,
            revision: 0,
        }
    }

    /// Creates a scene holding one tube built from `template`, selected.
    pub fn with_initial_tube(template: &TubeTemplate) -> Self {
        let mut store = Self::new();
        store.add_object(template);
        store
    }

    /// Sets the per-tube offset used by [`SceneStore::add_object`].
    pub fn with_add_offset(mut self, offset: Vec3) -> Self {
        self.add_offset = offset;
        self
    }

    pub fn set_add_offset(&mut self, offset: Vec3) {
        self.add_offset = offset;
    }

    /// Counter bumped by every operation that changed the scene.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds a tube built from `template` and selects it.
    ///
    /// The tube is shifted by `add_offset` times the number of tubes already
    /// present so consecutive additions do not land on top of each other.
    pub fn add_object(&mut self, template: &TubeTemplate) -> TubeId {
        let id = TubeId(self.next_id);
        self.next_id += 1;

        let mut tube = Tube::from_template(id, template);
        tube.position += self.add_offset * self.tubes.len() as f32;

        tracing::debug!(%id, position = ?tube.position, "Added tube");

        self.tubes.push(tube);
        self.selected = Some(id);
        self.finish_mutation();
        id
    }

    /// Merges `patch` into the tube with the given id.
    ///
    /// Unknown ids are ignored. Returns whether a tube was updated.
    pub fn update_object(&mut self, id: TubeId, patch: &TubePatch) -> bool {
        let updated = match self.tubes.iter_mut().find(|t| t.id == id) {
            Some(tube) => {
                tube.apply(patch);
                true
            }
            None => {
                tracing::debug!(%id, "Ignoring update for unknown tube");
                false
            }
        };

        if updated {
            self.finish_mutation();
        } else {
            self.recompute_joint_highlights();
        }
        updated
    }

    /// Flips the wireframe flag of every tube.
    pub fn toggle_wireframe_all(&mut self) {
        for tube in &mut self.tubes {
            tube.wireframe = !tube.wireframe;
        }
        tracing::debug!(count = self.tubes.len(), "Toggled wireframe");
        self.finish_mutation();
    }

    /// Sets the selection. The id is not checked; a dangling selection
    /// simply resolves to no tube.
    pub fn select(&mut self, id: TubeId) {
        if self.selected != Some(id) {
            tracing::debug!(%id, "Selected tube");
            self.selected = Some(id);
            self.revision += 1;
        }
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.revision += 1;
        }
    }

    /// Gets the currently selected tube ID.
    pub fn selected(&self) -> Option<TubeId> {
        self.selected
    }

    /// Gets the selected tube, if the selection refers to one.
    pub fn selected_tube(&self) -> Option<&Tube> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: TubeId) -> Option<&Tube> {
        self.tubes.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TubeId) -> bool {
        self.get(id).is_some()
    }

    /// All tubes in insertion order.
    pub fn tubes(&self) -> &[Tube] {
        &self.tubes
    }

    pub fn len(&self) -> usize {
        self.tubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tubes.is_empty()
    }

    /// Snapshot of every tube for drawing, with rotations snapped to
    /// `snap_set`.
    pub fn drawables(&self, snap_set: &[f32]) -> Vec<Drawable> {
        self.tubes
            .iter()
            .map(|tube| Drawable {
                id: tube.id,
                position: tube.position,
                rotation: display_rotation(tube.rotation, snap_set),
                size: tube.size(),
                selected: self.selected == Some(tube.id),
                joint_highlighted: tube.joint_highlighted,
                wireframe: tube.wireframe,
            })
            .collect()
    }

    fn finish_mutation(&mut self) {
        self.recompute_joint_highlights();
        self.revision += 1;
    }

    /// Marks every tube whose AABB intersects another tube's AABB.
    fn recompute_joint_highlights(&mut self) {
        let boxes: Vec<_> = self.tubes.iter().map(Tube::aabb).collect();
        let mut highlighted = vec![false; boxes.len()];

        for i in 0..boxes.len() {
            for j in (i + 1)..boxes.len() {
                if boxes[i].intersects(&boxes[j]) {
                    highlighted[i] = true;
                    highlighted[j] = true;
                }
            }
        }

        for (tube, flag) in self.tubes.iter_mut().zip(highlighted) {
            tube.joint_highlighted = flag;
        }
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_at(store: &mut SceneStore, position: Vec3) -> TubeId {
        let id = store.add_object(&TubeTemplate::cube(1.0));
        store.update_object(id, &TubePatch::new().with_position(position));
        id
    }

    fn assert_highlights_match_pairwise(store: &SceneStore) {
        let tubes = store.tubes();
        for (i, tube) in tubes.iter().enumerate() {
            let expected = tubes
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && tube.aabb().intersects(&other.aabb()));
            assert_eq!(tube.is_joint_highlighted(), expected, "tube {}", tube.id);
        }
    }

    #[test]
    fn test_initial_tube_is_selected() {
        let store = SceneStore::with_initial_tube(&TubeTemplate::default());
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected(), Some(TubeId(1)));
        assert_eq!(store.selected_tube().unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn test_add_object_allocates_fresh_id_and_selects() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        for _ in 0..5 {
            let before: Vec<TubeId> = store.tubes().iter().map(|t| t.id).collect();
            let len = store.len();

            let id = store.add_object(&TubeTemplate::default());

            assert_eq!(store.len(), len + 1);
            assert!(!before.contains(&id));
            assert_eq!(store.selected(), Some(id));
        }
    }

    #[test]
    fn test_add_object_offsets_position() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        let second = store.add_object(&TubeTemplate::default());
        let third = store.add_object(&TubeTemplate::default());

        assert_eq!(store.get(second).unwrap().position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(store.get(third).unwrap().position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        store.add_object(&TubeTemplate::default());
        let before = store.tubes().to_vec();
        let revision = store.revision();

        let updated = store.update_object(TubeId(99), &TubePatch::new().with_width(7.0));

        assert!(!updated);
        assert_eq!(store.tubes(), before.as_slice());
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        let id = TubeId(1);

        assert!(store.update_object(id, &TubePatch::new().with_height(2.0).with_width(-1.0)));

        let tube = store.get(id).unwrap();
        assert_eq!(tube.height, 2.0);
        // Negative values are stored as given
        assert_eq!(tube.width, -1.0);
        assert_eq!(tube.length, 3.0);
    }

    #[test]
    fn test_select_does_not_validate() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        store.select(TubeId(42));
        assert_eq!(store.selected(), Some(TubeId(42)));
        assert!(store.selected_tube().is_none());

        store.clear_selection();
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_touching_boxes_are_highlighted() {
        let mut store = SceneStore::new();
        let a = cube_at(&mut store, Vec3::ZERO);
        let b = cube_at(&mut store, Vec3::new(1.0, 0.0, 0.0));

        assert!(store.get(a).unwrap().is_joint_highlighted());
        assert!(store.get(b).unwrap().is_joint_highlighted());
    }

    #[test]
    fn test_highlights_follow_every_mutation() {
        let mut store = SceneStore::new();
        let a = cube_at(&mut store, Vec3::ZERO);
        let b = cube_at(&mut store, Vec3::new(0.5, 0.0, 0.0));
        let c = cube_at(&mut store, Vec3::new(5.0, 0.0, 0.0));
        assert_highlights_match_pairwise(&store);
        assert!(!store.get(c).unwrap().is_joint_highlighted());

        store.update_object(b, &TubePatch::new().with_position(Vec3::new(4.5, 0.0, 0.0)));
        assert_highlights_match_pairwise(&store);
        assert!(!store.get(a).unwrap().is_joint_highlighted());
        assert!(store.get(b).unwrap().is_joint_highlighted());
        assert!(store.get(c).unwrap().is_joint_highlighted());

        store.update_object(c, &TubePatch::new().with_height(0.2).with_position(Vec3::new(4.5, 3.0, 0.0)));
        assert_highlights_match_pairwise(&store);
        assert!(!store.get(b).unwrap().is_joint_highlighted());
    }

    #[test]
    fn test_toggle_wireframe_flips_every_tube() {
        let mut store = SceneStore::new();
        let ids: Vec<TubeId> = (0..4).map(|_| store.add_object(&TubeTemplate::default())).collect();
        store.update_object(ids[1], &TubePatch::new().with_wireframe(true));
        store.update_object(ids[3], &TubePatch::new().with_wireframe(true));

        store.toggle_wireframe_all();

        let flags: Vec<bool> = store.tubes().iter().map(|t| t.wireframe).collect();
        assert_eq!(flags, vec![true, false, true, false]);
    }

    #[test]
    fn test_drawables_snap_rotation_but_store_keeps_value() {
        let mut store = SceneStore::with_initial_tube(&TubeTemplate::default());
        let stored = Vec3::new(40.0_f32.to_radians(), 0.0, 0.0);
        store.update_object(TubeId(1), &TubePatch::new().with_rotation(stored));

        let drawables = store.drawables(&crate::geometry::DEFAULT_SNAP_ANGLES);
        assert_eq!(drawables.len(), 1);
        assert!((drawables[0].rotation.x - 45.0_f32.to_radians()).abs() < 1e-6);
        assert!(drawables[0].selected);
        assert_eq!(store.get(TubeId(1)).unwrap().rotation, stored);
    }
}
