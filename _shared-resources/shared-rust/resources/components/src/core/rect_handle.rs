// Rectangle Handle System (HWND-like)
// Tracks where clickable things were drawn in the last frame so mouse
// coordinates can be mapped back to the element that owns them
//
// Usage:
//   let mut registry = RectRegistry::new();
//   registry.register(Some("button:overview"), rect);
//   // Later, on a click...
//   if let Some(hit) = registry.hit_test(column, row) {
//       println!("Clicked: {:?}", registry.get_name(hit));
//   }

use ratatui::layout::Rect;
use std::collections::HashMap;

/// Handle to a registered rectangle (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectHandle(u64);

/// Metrics for a registered rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectMetrics {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl RectMetrics {
    /// Check if a cell (x, y) lies inside the rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

impl From<Rect> for RectMetrics {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    name: Option<String>,
    metrics: RectMetrics,
    /// Registration order, later entries are drawn on top
    z_order: u64,
}

/// Registry for tracking rendered rectangles with handles
#[derive(Debug, Clone)]
pub struct RectRegistry {
    /// Map of handle ID to registry entry
    handles: HashMap<u64, RegistryEntry>,
    /// Map of name to handle ID (for lookup by name)
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
    /// Monotonic counter used for z-ordering
    next_z: u64,
}

impl RectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is never handed out
            next_z: 0,
        }
    }

    /// Register a rectangle and return a handle
    /// Re-registering an existing name updates it in place and raises it to the top
    pub fn register(&mut self, name: Option<&str>, rect: Rect) -> RectHandle {
        let metrics = RectMetrics::from(rect);
        let z_order = self.next_z;
        self.next_z += 1;

        if let Some(name_str) = name {
            if let Some(&existing_id) = self.name_to_handle.get(name_str) {
                if let Some(entry) = self.handles.get_mut(&existing_id) {
                    entry.metrics = metrics;
                    entry.z_order = z_order;
                    return RectHandle(existing_id);
                }
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;

        self.handles.insert(
            handle_id,
            RegistryEntry {
                name: name.map(|s| s.to_string()),
                metrics,
                z_order,
            },
        );

        if let Some(name_str) = name {
            self.name_to_handle.insert(name_str.to_string(), handle_id);
        }

        RectHandle(handle_id)
    }

    /// Get name for a handle (if it was registered with a name)
    pub fn get_name(&self, handle: RectHandle) -> Option<&str> {
        self.handles
            .get(&handle.0)
            .and_then(|entry| entry.name.as_deref())
    }

    /// Find the top-most rectangle containing the cell (x, y)
    pub fn hit_test(&self, x: u16, y: u16) -> Option<RectHandle> {
        self.handles
            .iter()
            .filter(|(_, entry)| entry.metrics.contains(x, y))
            .max_by_key(|(_, entry)| entry.z_order)
            .map(|(&id, _)| RectHandle(id))
    }

    /// Like `hit_test`, restricted to names starting with `prefix`
    pub fn hit_test_prefixed(&self, x: u16, y: u16, prefix: &str) -> Option<RectHandle> {
        self.handles
            .iter()
            .filter(|(_, entry)| {
                entry
                    .name
                    .as_deref()
                    .map(|n| n.starts_with(prefix))
                    .unwrap_or(false)
            })
            .filter(|(_, entry)| entry.metrics.contains(x, y))
            .max_by_key(|(_, entry)| entry.z_order)
            .map(|(&id, _)| RectHandle(id))
    }

    /// Drop every rectangle whose name starts with `prefix`
    /// Called before each frame so stale hit areas from the previous layout never match
    pub fn unregister_prefixed(&mut self, prefix: &str) -> usize {
        let stale: Vec<(String, u64)> = self
            .name_to_handle
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, &id)| (name.clone(), id))
            .collect();

        for (name, id) in &stale {
            self.name_to_handle.remove(name);
            self.handles.remove(id);
        }
        stale.len()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Default for RectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_query() {
        let mut registry = RectRegistry::new();
        let rect = Rect { x: 10, y: 20, width: 100, height: 50 };

        let handle = registry.register(Some("test-window"), rect);

        assert_eq!(registry.get_name(handle), Some("test-window"));
        assert_eq!(registry.hit_test(10, 20), Some(handle));
        assert_eq!(registry.hit_test(109, 69), Some(handle));
        assert_eq!(registry.hit_test(110, 69), None);
    }

    #[test]
    fn test_reregister_same_name_keeps_handle() {
        let mut registry = RectRegistry::new();
        let first = registry.register(Some("button:a"), Rect { x: 0, y: 0, width: 5, height: 1 });
        let second = registry.register(Some("button:a"), Rect { x: 3, y: 1, width: 5, height: 1 });

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(0, 0), None);
        assert_eq!(registry.hit_test(3, 1), Some(first));
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let mut registry = RectRegistry::new();
        let panel = registry.register(Some("panel"), Rect { x: 0, y: 0, width: 20, height: 10 });
        let button = registry.register(Some("button:b"), Rect { x: 2, y: 0, width: 6, height: 1 });

        assert_eq!(registry.hit_test(3, 0), Some(button));
        assert_eq!(registry.hit_test(3, 5), Some(panel));
        assert_eq!(registry.hit_test(30, 5), None);
    }

    #[test]
    fn test_hit_test_edges_are_exclusive() {
        let mut registry = RectRegistry::new();
        let handle = registry.register(Some("button:a"), Rect { x: 4, y: 2, width: 3, height: 1 });

        assert_eq!(registry.hit_test(4, 2), Some(handle));
        assert_eq!(registry.hit_test(6, 2), Some(handle));
        assert_eq!(registry.hit_test(7, 2), None);
        assert_eq!(registry.hit_test(4, 3), None);
    }

    #[test]
    fn test_hit_test_prefixed_ignores_other_names() {
        let mut registry = RectRegistry::new();
        registry.register(Some("button:a"), Rect { x: 0, y: 0, width: 4, height: 1 });
        registry.register(Some("overlay"), Rect { x: 0, y: 0, width: 40, height: 10 });

        let hit = registry.hit_test_prefixed(1, 0, "button:").unwrap();
        assert_eq!(registry.get_name(hit), Some("button:a"));
    }

    #[test]
    fn test_unregister_prefixed() {
        let mut registry = RectRegistry::new();
        registry.register(Some("button:a"), Rect { x: 0, y: 0, width: 4, height: 1 });
        registry.register(Some("button:b"), Rect { x: 5, y: 0, width: 4, height: 1 });
        registry.register(Some("panel"), Rect { x: 0, y: 1, width: 40, height: 10 });

        assert_eq!(registry.unregister_prefixed("button:"), 2);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hit_test(1, 0), None);
        let panel = registry.hit_test(1, 2).unwrap();
        assert_eq!(registry.get_name(panel), Some("panel"));
    }
}
