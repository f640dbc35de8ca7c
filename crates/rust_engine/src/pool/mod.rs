//! Fixed-capacity object pools
//!
//! Members are created lazily on first request and never destroyed: killing
//! a member deactivates and hides it so a later [`ObjectPool::get`] can hand
//! it out again. Once `max_size` members exist and all are active, `get`
//! returns `None` and the caller simply goes without.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle to a pool member
    pub struct PoolKey;
}

/// Objects that can live in an [`ObjectPool`]
pub trait Poolable {
    /// Whether the object is currently in play
    fn is_active(&self) -> bool;

    /// Mark the object in or out of play
    fn set_active(&mut self, active: bool);

    /// Show or hide the object
    fn set_visible(&mut self, visible: bool);
}

/// Pool of reusable objects capped at `max_size` members
pub struct ObjectPool<T: Poolable> {
    members: SlotMap<PoolKey, T>,
    /// Creation order, so reuse is deterministic
    order: Vec<PoolKey>,
    max_size: usize,
    factory: Box<dyn FnMut() -> T>,
}

impl<T: Poolable> ObjectPool<T> {
    /// Create an empty pool; `factory` builds members on demand
    pub fn new(max_size: usize, factory: impl FnMut() -> T + 'static) -> Self {
        Self {
            members: SlotMap::with_capacity_and_key(max_size),
            order: Vec::with_capacity(max_size),
            max_size,
            factory: Box::new(factory),
        }
    }

    /// Hand out an inactive member, creating one if the pool has room
    ///
    /// The returned member is not activated; the caller decides how to
    /// bring it into play. Returns `None` when every member is active and
    /// the pool is full.
    pub fn get(&mut self) -> Option<PoolKey> {
        if let Some(&key) = self
            .order
            .iter()
            .find(|&&key| self.members.get(key).is_some_and(|member| !member.is_active()))
        {
            return Some(key);
        }

        if self.order.len() >= self.max_size {
            log::trace!("Pool full: {}/{} members active", self.count_active(), self.max_size);
            return None;
        }

        let mut member = (self.factory)();
        member.set_active(false);
        member.set_visible(false);
        let key = self.members.insert(member);
        self.order.push(key);
        Some(key)
    }

    /// Deactivate and hide a member
    ///
    /// Returns `true` if the member was active. Killing an inactive member
    /// or an unknown key does nothing.
    pub fn kill_and_hide(&mut self, key: PoolKey) -> bool {
        match self.members.get_mut(key) {
            Some(member) => {
                let was_active = member.is_active();
                member.set_active(false);
                member.set_visible(false);
                was_active
            }
            None => false,
        }
    }

    /// Borrow a member
    pub fn get_member(&self, key: PoolKey) -> Option<&T> {
        self.members.get(key)
    }

    /// Mutably borrow a member
    pub fn get_member_mut(&mut self, key: PoolKey) -> Option<&mut T> {
        self.members.get_mut(key)
    }

    /// All members in creation order
    pub fn iter(&self) -> impl Iterator<Item = (PoolKey, &T)> {
        self.order.iter().filter_map(|&key| self.members.get(key).map(|m| (key, m)))
    }

    /// Active members in creation order
    pub fn iter_active(&self) -> impl Iterator<Item = (PoolKey, &T)> {
        self.iter().filter(|(_, member)| member.is_active())
    }

    /// Mutably visit every active member
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(PoolKey, &mut T)) {
        for &key in &self.order {
            if let Some(member) = self.members.get_mut(key) {
                if member.is_active() {
                    f(key, member);
                }
            }
        }
    }

    /// Keys of the active members
    pub fn active_keys(&self) -> Vec<PoolKey> {
        self.iter_active().map(|(key, _)| key).collect()
    }

    /// Number of active members
    pub fn count_active(&self) -> usize {
        self.members.values().filter(|member| member.is_active()).count()
    }

    /// Number of members created so far
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no member has been created yet
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Maximum number of members
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
