use crate::{Hash, HashableChar};

#[derive(Default, Clone, Copy)]
struct MapElem<ValueType> {
    key: u64,
    value: ValueType,
}

/// open addressing hashmap used to store per character values
///
/// this implementation relies on a couple of base assumptions in order to simplify the implementation
/// - the default value for the `ValueType` is used as a dummy value to indicate an empty cell,
///   so it is never stored explicitly
/// - elements can't be removed
/// - only allocates memory on first write access. Most comparisons only touch
///   extended ascii and never write to this map at all
pub(crate) struct GrowingHashmap<ValueType>
where
    ValueType: Default + Copy + Eq,
{
    used: usize,
    fill: usize,
    mask: usize,
    map: Option<Vec<MapElem<ValueType>>>,
}

impl<ValueType> Default for GrowingHashmap<ValueType>
where
    ValueType: Default + Copy + Eq,
{
    #[inline]
    fn default() -> Self {
        GrowingHashmap {
            used: 0,
            fill: 0,
            mask: 0,
            map: None,
        }
    }
}

impl<ValueType> GrowingHashmap<ValueType>
where
    ValueType: Default + Copy + Eq,
{
    const MIN_SIZE: usize = 8;

    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.used
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.map.as_ref().map_or(0, |_| self.mask + 1)
    }

    pub fn get(&self, key: u64) -> ValueType {
        match &self.map {
            None => Default::default(),
            Some(map) => map[Self::lookup(map, self.mask, key)].value,
        }
    }

    pub fn get_mut(&mut self, key: u64) -> &mut ValueType {
        if self.map.is_none() {
            self.allocate();
        }

        let mut i = self.lookup_key(key);
        if self.elem(i).value == Default::default() {
            self.fill += 1;
            // resize when 2/3 full
            if self.fill * 3 >= (self.mask + 1) * 2 {
                self.grow((self.used + 1) * 2);
                i = self.lookup_key(key);
            }

            self.used += 1;
        }

        let elem = &mut self.elems_mut()[i];
        elem.key = key;
        &mut elem.value
    }

    fn allocate(&mut self) {
        self.mask = Self::MIN_SIZE - 1;
        self.map = Some(vec![MapElem::default(); Self::MIN_SIZE]);
    }

    fn elem(&self, i: usize) -> &MapElem<ValueType> {
        match &self.map {
            Some(map) => &map[i],
            None => unreachable!("map is allocated before the first lookup"),
        }
    }

    fn elems_mut(&mut self) -> &mut Vec<MapElem<ValueType>> {
        self.map.get_or_insert_with(Vec::new)
    }

    fn lookup_key(&self, key: u64) -> usize {
        match &self.map {
            Some(map) => Self::lookup(map, self.mask, key),
            None => unreachable!("map is allocated before the first lookup"),
        }
    }

    /// lookup key inside the hashmap using a similar collision resolution
    /// strategy to CPython and Ruby
    fn lookup(map: &[MapElem<ValueType>], mask: usize, key: u64) -> usize {
        let mut i = (key & mask as u64) as usize;

        if map[i].value == Default::default() || map[i].key == key {
            return i;
        }

        let mut perturb = key;
        loop {
            i = (i.wrapping_mul(5).wrapping_add(perturb as usize).wrapping_add(1)) & mask;

            if map[i].value == Default::default() || map[i].key == key {
                return i;
            }

            perturb >>= 5;
        }
    }

    fn grow(&mut self, min_used: usize) {
        let mut new_size = self.mask + 1;
        while new_size <= min_used {
            new_size <<= 1;
        }

        let new_mask = new_size - 1;
        let mut new_map = vec![MapElem::default(); new_size];

        if let Some(old_map) = self.map.take() {
            for elem in old_map {
                if elem.value != Default::default() {
                    let j = Self::lookup(&new_map, new_mask, elem.key);
                    new_map[j] = elem;
                }
            }
        }

        self.fill = self.used;
        self.mask = new_mask;
        self.map = Some(new_map);
    }
}

/// character -> value map with a fast path for extended ascii.
///
/// Keys are routed by their [`Hash`]: values in `0..=255` are stored in a plain array,
/// everything else in one of two [`GrowingHashmap`]s.
pub(crate) struct HybridGrowingHashmap<ValueType>
where
    ValueType: Default + Copy + Eq,
{
    map_unsigned: GrowingHashmap<ValueType>,
    map_signed: GrowingHashmap<ValueType>,
    extended_ascii: [ValueType; 256],
}

impl<ValueType> HybridGrowingHashmap<ValueType>
where
    ValueType: Default + Copy + Eq,
{
    pub fn new() -> Self {
        HybridGrowingHashmap {
            map_unsigned: GrowingHashmap::default(),
            map_signed: GrowingHashmap::default(),
            extended_ascii: [Default::default(); 256],
        }
    }

    pub fn get<CharT>(&self, key: CharT) -> ValueType
    where
        CharT: HashableChar,
    {
        match key.hash_char() {
            Hash::SIGNED(value) => {
                if value < 0 {
                    self.map_signed.get(value as u64)
                } else if value <= 255 {
                    self.extended_ascii[value as usize]
                } else {
                    self.map_unsigned.get(value as u64)
                }
            }
            Hash::UNSIGNED(value) => {
                if value <= 255 {
                    self.extended_ascii[value as usize]
                } else {
                    self.map_unsigned.get(value)
                }
            }
        }
    }

    pub fn get_mut<CharT>(&mut self, key: CharT) -> &mut ValueType
    where
        CharT: HashableChar,
    {
        match key.hash_char() {
            Hash::SIGNED(value) => {
                if value < 0 {
                    self.map_signed.get_mut(value as u64)
                } else if value <= 255 {
                    &mut self.extended_ascii[value as usize]
                } else {
                    self.map_unsigned.get_mut(value as u64)
                }
            }
            Hash::UNSIGNED(value) => {
                if value <= 255 {
                    &mut self.extended_ascii[value as usize]
                } else {
                    self.map_unsigned.get_mut(value)
                }
            }
        }
    }
}
