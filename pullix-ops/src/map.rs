// Copyright 2026 the Pullix authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Element transformation.

use std::rc::Rc;

use pullix_core::{BoxCursor, Cursor, Element, Result, Seq};

/// Transform every element of `source` with `mapper`.
///
/// One upstream element is pulled per produced element; failures raised by
/// `mapper` propagate unmodified. The cursor forwards the removal capability
/// upstream, so removal acts on the pre-image of the transformed element.
pub fn map_impl<T, R, F>(source: &Seq<T>, mapper: F) -> Seq<R>
where
    T: Element,
    R: Element,
    F: Fn(T) -> R + 'static,
{
    let mapper: Rc<F> = Rc::new(mapper);
    let source = source.clone();
    Seq::from_factory(move || {
        Box::new(MapCursor {
            upstream: source.cursor(),
            mapper: Rc::clone(&mapper),
            _out: std::marker::PhantomData,
        })
    })
}

struct MapCursor<T, R, F> {
    upstream: BoxCursor<T>,
    mapper: Rc<F>,
    _out: std::marker::PhantomData<R>,
}

impl<T, R, F> Cursor for MapCursor<T, R, F>
where
    F: Fn(T) -> R,
{
    type Item = R;

    fn has_next(&mut self) -> Result<bool> {
        self.upstream.has_next()
    }

    fn next(&mut self) -> Result<R> {
        let value = self.upstream.next()?;
        Ok((self.mapper)(value))
    }

    fn remove(&mut self) -> Result<()> {
        self.upstream.remove()
    }
}
