//! Generation Benchmarks
//!
//! Measures the stages a `cqrsgen generate` run goes through on the
//! customer/invoice fixture, and how generation scales with schema size.
//!
//! # What We're Measuring
//!
//! 1. **parse**: SDL text → schema document
//! 2. **generate**: validation plus all four generators
//! 3. **render**: classifiers → source text
//! 4. **scaling**: full pipeline over schemas with a growing number of aggregates

use cqrsgen_codegen::{Artifact, GeneratorConfig, MemorySink, Pipeline};
use cqrsgen_core::NamingConfig;
use cqrsgen_schema::{SchemaDocument, SchemaGateway};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::fmt::Write;

const FIXTURE: &str = include_str!("../../../fixtures/customer_invoice.graphql");

fn config() -> GeneratorConfig {
    GeneratorConfig::new(NamingConfig::new("Acme\\Domain"))
}

/// A schema with `count` aggregates, each with a factory, three mutators and their events.
fn synthetic_schema(count: usize) -> String {
    let mut sdl = String::from("type Mutation {\n");
    for i in 0..count {
        let _ = writeln!(sdl, "    Thing{i}(id: ID!): Thing{i}!");
    }
    sdl.push_str("}\ninput Money { amount: Float! currency: String! }\n");
    for i in 0..count {
        let _ = write!(
            sdl,
            "type Thing{i} {{\n    register(ownerId: ID!, price: Money): Thing{i}!\n    rename(name: String!): Boolean!\n    reprice(price: Money!): Boolean!\n    archive(reason: String): Boolean!\n}}\n\
             interface Thing{i}Events {{\n    Thing{i}WasRegistered(ownerId: ID!, price: Money): Boolean!\n    Thing{i}WasRenamed(name: String!): Boolean!\n    Thing{i}WasRepriced(price: Money!): Boolean!\n    Thing{i}WasArchived(reason: String): Boolean!\n}}\n"
        );
    }
    sdl
}

fn bench_fixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixture");
    let config = config();
    let gateway = SchemaGateway::new(SchemaDocument::parse(FIXTURE).unwrap());
    let artifacts = Pipeline::new(&gateway, &config).generate().unwrap();

    group.throughput(Throughput::Bytes(FIXTURE.len() as u64));

    group.bench_function("parse", |b| {
        b.iter(|| SchemaDocument::parse(black_box(FIXTURE)).unwrap())
    });

    group.bench_function("generate", |b| {
        b.iter(|| Pipeline::new(black_box(&gateway), &config).generate().unwrap())
    });

    group.bench_function("render", |b| {
        b.iter(|| {
            black_box(&artifacts)
                .iter()
                .map(Artifact::render)
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let config = config();

    for count in [1usize, 10, 50] {
        let sdl = synthetic_schema(count);
        let gateway = SchemaGateway::new(SchemaDocument::parse(&sdl).unwrap());

        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("pipeline", count), &gateway, |b, gateway| {
            b.iter(|| {
                let mut sink = MemorySink::new();
                Pipeline::new(gateway, &config).run(&mut sink).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixture, bench_scaling);
criterion_main!(benches);
