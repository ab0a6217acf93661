/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Paging through detector models, their versions and inputs

use crate::client::Client;
use crate::input::{
    ListDetectorModelVersionsInput, ListDetectorModelsInput, ListInputsInput, OperationInput,
};
use crate::output::{ListDetectorModelVersionsOutput, ListDetectorModelsOutput, ListInputsOutput};
use crate::Error;
use aws_hyper::BoxError;
use smithy_http::body::SdkBody;
use smithy_http::result::SdkError;
use tower::Service;

/// An input whose operation returns results a page at a time
pub trait Paginated: OperationInput {
    fn input_token(&self) -> Option<&str>;

    fn set_input_token(&mut self, token: Option<String>);

    fn output_token(output: &Self::Output) -> Option<&str>;
}

macro_rules! paginated {
    ($( $input:ident => $output:ident; )+) => {
        $(
            impl Paginated for $input {
                fn input_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }

                fn set_input_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }

                fn output_token(output: &$output) -> Option<&str> {
                    output.next_token.as_deref()
                }
            }
        )+
    };
}

paginated! {
    ListDetectorModelVersionsInput => ListDetectorModelVersionsOutput;
    ListDetectorModelsInput => ListDetectorModelsOutput;
    ListInputsInput => ListInputsOutput;
}

/// Sends a list operation repeatedly, following `nextToken`
///
/// Paging stops after a page without a token, after a page that repeats the token it was
/// requested with, or after the first error.
#[derive(Debug)]
pub struct Paginator<C, I> {
    client: Client<C>,
    input: I,
    done: bool,
}

impl<C, I> Paginator<C, I>
where
    I: Paginated,
    C: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
        + Send
        + Clone
        + 'static,
    C::Error: Into<BoxError> + Send + Sync + 'static,
    C::Future: Send + 'static,
{
    pub(crate) fn new(client: Client<C>, input: I) -> Self {
        Paginator {
            client,
            input,
            done: false,
        }
    }

    /// Fetch the next page, or `None` once every page has been returned
    pub async fn next_page(&mut self) -> Option<Result<I::Output, SdkError<Error>>> {
        if self.done {
            return None;
        }
        let sent_token = self.input.input_token().map(str::to_owned);
        let result = self.client.send(self.input.clone()).await;
        match &result {
            Ok(output) => match I::output_token(output) {
                Some(token) if !token.is_empty() && Some(token) != sent_token.as_deref() => {
                    self.input.set_input_token(Some(token.to_owned()));
                }
                Some(token) if !token.is_empty() => {
                    tracing::debug!(token = %token, "next token repeats the previous one; stopping");
                    self.done = true;
                }
                _ => self.done = true,
            },
            Err(_) => self.done = true,
        }
        Some(result)
    }

    /// Fetch every remaining page
    pub async fn collect_pages(mut self) -> Result<Vec<I::Output>, SdkError<Error>> {
        let mut pages = Vec::new();
        loop {
            match self.next_page().await {
                Some(page) => pages.push(page?),
                None => return Ok(pages),
            }
        }
    }
}
