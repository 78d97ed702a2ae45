#[cfg(test)]
mod config;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod scenarios;
#[cfg(test)]
mod typed;

/// Template shared by several test modules: `/a/:b/:c?/*` with int params.
#[cfg(test)]
pub(crate) fn int_tail_route() -> pathmold::Route<pathmold::Closed> {
    pathmold::Route::new()
        .extend(["a"])
        .and_then(|r| r.param("b", pathmold::IntParam))
        .and_then(|r| r.opt("c", pathmold::IntParam))
        .and_then(|r| r.rest(pathmold::IntParam))
        .unwrap()
}
