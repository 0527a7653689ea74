use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use opinions_core::{OpinionForm, DUPLICATE_OPINION_MESSAGE, UNREADABLE_FORM_MESSAGE};
use opinions_service::ServiceError;

use crate::{pages, AppState, PageError};

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let opinion = state.opinions.random_opinion().await?;
    Ok(pages::opinion(&opinion))
}

pub async fn detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    // Non-numeric ids are unknown pages, not bad requests.
    let id: i64 = id.parse().map_err(|_| PageError::NotFound)?;
    let opinion = state.opinions.get_opinion(id).await?;
    Ok(pages::opinion(&opinion))
}

pub async fn add_form() -> Html<String> {
    pages::add_opinion(&OpinionForm::default(), None, None)
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<OpinionForm>, FormRejection>,
) -> Result<Response, PageError> {
    // Percent-decoding is lossy: invalid UTF-8 arrives as U+FFFD and is stored that way.
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable opinion form");
            let blank = OpinionForm::default();
            let errors = blank.validate().err();
            return Ok(pages::add_opinion(&blank, errors.as_ref(), Some(UNREADABLE_FORM_MESSAGE))
                .into_response());
        },
    };

    match state.opinions.add_opinion(&form).await {
        // 303 so a browser refresh does not resubmit the form.
        Ok(stored) => Ok(Redirect::to(&format!("/opinions/{}", stored.id)).into_response()),
        Err(ServiceError::Validation(errors)) => {
            Ok(pages::add_opinion(&form, Some(&errors), None).into_response())
        },
        Err(ServiceError::Duplicate) => {
            Ok(pages::add_opinion(&form, None, Some(DUPLICATE_OPINION_MESSAGE)).into_response())
        },
        Err(e) => Err(e.into()),
    }
}
