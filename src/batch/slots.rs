use smallvec::SmallVec;

use crate::video::assets::texture::TextureHandle;
use crate::video::MAX_TEXTURE_SLOTS;

/// Maps textures to the texture units they are bound to for the duration of a
/// frame. Slot 0 always holds the solid white texture used by untextured quads.
#[derive(Debug, Clone)]
pub struct TextureSlots {
    slots: SmallVec<[TextureHandle; MAX_TEXTURE_SLOTS]>,
}

impl TextureSlots {
    /// Creates a table with `white` reserved at slot 0.
    pub fn new(white: TextureHandle) -> Self {
        let mut slots = SmallVec::new();
        slots.push(white);
        TextureSlots { slots }
    }

    /// Returns the slot `texture` is bound to, taking a free slot if it is not
    /// bound yet. `None` selects the white texture at slot 0.
    ///
    /// Returns `None` if every slot is occupied by other textures.
    pub fn acquire(&mut self, texture: Option<TextureHandle>) -> Option<usize> {
        let texture = match texture {
            Some(texture) => texture,
            None => return Some(0),
        };

        if let Some(slot) = self.find(texture) {
            return Some(slot);
        }

        if self.slots.len() >= MAX_TEXTURE_SLOTS {
            return None;
        }

        self.slots.push(texture);
        Some(self.slots.len() - 1)
    }

    /// Returns the slot `texture` is currently bound to.
    #[inline]
    pub fn find(&self, texture: TextureHandle) -> Option<usize> {
        self.slots.iter().position(|&v| v == texture)
    }

    /// Releases every slot except the reserved white one.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.truncate(1);
    }

    /// Returns the number of occupied slots, the reserved one included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if only the reserved slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 1
    }

    /// Releases the slots of textures for which `f` returns false. The reserved
    /// slot is always kept and the remaining textures are compacted.
    ///
    /// Returns the new slot of every old slot, or `None` if nothing changed.
    pub fn retain<F>(&mut self, mut f: F) -> Option<[Option<usize>; MAX_TEXTURE_SLOTS]>
    where
        F: FnMut(TextureHandle) -> bool,
    {
        let mut remap = [None; MAX_TEXTURE_SLOTS];
        let mut kept = SmallVec::<[TextureHandle; MAX_TEXTURE_SLOTS]>::new();

        for (i, &texture) in self.slots.iter().enumerate() {
            if i == 0 || f(texture) {
                remap[i] = Some(kept.len());
                kept.push(texture);
            }
        }

        if kept.len() == self.slots.len() {
            return None;
        }

        self.slots = kept;
        Some(remap)
    }

    #[inline]
    pub fn as_slice(&self) -> &[TextureHandle] {
        &self.slots
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::handle::HandleLike;

    fn texture(index: u32) -> TextureHandle {
        TextureHandle::new(index, 1)
    }

    #[test]
    fn reserved() {
        let mut slots = TextureSlots::new(texture(0));
        assert_eq!(slots.acquire(None), Some(0));
        assert_eq!(slots.acquire(Some(texture(0))), Some(0));
        assert_eq!(slots.len(), 1);
        assert!(slots.is_empty());
    }

    #[test]
    fn dedup() {
        let mut slots = TextureSlots::new(texture(0));
        assert_eq!(slots.acquire(Some(texture(7))), Some(1));
        assert_eq!(slots.acquire(Some(texture(3))), Some(2));
        assert_eq!(slots.acquire(Some(texture(7))), Some(1));
        assert_eq!(slots.len(), 3);

        // Same index but different version is another texture.
        assert_eq!(slots.acquire(Some(TextureHandle::new(7, 3))), Some(3));
    }

    #[test]
    fn retain() {
        let mut slots = TextureSlots::new(texture(0));
        for i in 1..5 {
            slots.acquire(Some(texture(i)));
        }

        assert!(slots.retain(|_| true).is_none());

        let remap = slots.retain(|v| v != texture(2) && v != texture(0)).unwrap();
        assert_eq!(slots.as_slice(), &[texture(0), texture(1), texture(3), texture(4)]);
        assert_eq!(&remap[..5], &[Some(0), Some(1), None, Some(2), Some(3)]);
        assert_eq!(slots.acquire(Some(texture(3))), Some(2));
    }

    #[test]
    fn exhausted() {
        let mut slots = TextureSlots::new(texture(0));
        for i in 1..16 {
            assert_eq!(slots.acquire(Some(texture(i))), Some(i as usize));
        }

        assert_eq!(slots.len(), MAX_TEXTURE_SLOTS);
        assert_eq!(slots.acquire(Some(texture(16))), None);
        assert_eq!(slots.acquire(Some(texture(9))), Some(9));
        assert_eq!(slots.acquire(None), Some(0));

        slots.clear();
        assert!(slots.is_empty());
        assert_eq!(slots.as_slice(), &[texture(0)]);
        assert_eq!(slots.acquire(Some(texture(16))), Some(1));
    }
}
